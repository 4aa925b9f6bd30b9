use cabinetr_cutlist::{
    calculate_piece_dimensions, checked_cutlist_csv, cutlist_to_csv, CabinetOpening, CabinetParams,
    CutlistCalculator, CutlistError, GlobalSettings, OpeningKind, Overlay, CUTLIST_CSV_HEADER,
};

#[test]
fn test_cutlist_csv_lines() {
    let settings = GlobalSettings {
        rail_width: 2.5,
        stile_width: 2.5,
        ..GlobalSettings::default()
    };
    let door = CabinetOpening::door("DOOR1", 24.0, 30.0)
        .with_overlay(Overlay::uniform(0.5))
        .with_quantity(2);
    let csv = cutlist_to_csv(&CutlistCalculator::new(settings).calculate(&[door]));
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CUTLIST_CSV_HEADER);
    assert_eq!(lines[1], "DOOR1_rails,Rail,8.188,2.500,0.750,4");
    assert_eq!(lines[2], "DOOR1_stiles,Stile,31.000,2.500,0.750,4");
    assert_eq!(lines[3], "DOOR1_panel,Panel,26.750,8.188,0.750,2");
}

#[test]
fn test_export_blocked_until_ratios_fixed() {
    let calculator = CutlistCalculator::default();
    let mut drawers = CabinetOpening::drawer("DRWR1", 18.0, 20.0)
        .with_quantity(2)
        .with_ratios(vec![30.0, 60.0]);
    let err = checked_cutlist_csv(std::slice::from_ref(&drawers), &calculator).unwrap_err();
    assert!(matches!(err, CutlistError::InvalidRatios { .. }));

    drawers.drawer_ratios = vec![16.67, 83.33];
    assert!(checked_cutlist_csv(&[drawers], &calculator).is_ok());
}

#[test]
fn test_piece_breakdown_for_drawers() {
    let params = CabinetParams {
        opening_width: 18.0,
        opening_height: 6.0,
        kind: OpeningKind::Drawer,
        quantity: 1,
        ..CabinetParams::default()
    };
    let pieces = calculate_piece_dimensions(&params);
    // 19 x 7 envelope, no rounding, 1" frame stock
    assert_eq!(pieces[0].length, 7.0);
    assert_eq!(pieces[0].quantity, 2);
    assert_eq!(pieces[1].length, 17.75);
    assert_eq!(pieces[2].length, 5.75);
    assert_eq!(pieces[2].width, 17.75);
    assert_eq!(pieces[2].quantity, 1);
}
