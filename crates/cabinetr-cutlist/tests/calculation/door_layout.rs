use cabinetr_cutlist::{calculate_cutlist, CabinetOpening, GlobalSettings, Overlay, PieceKind};

fn shop_settings() -> GlobalSettings {
    GlobalSettings {
        rail_width: 2.5,
        stile_width: 2.5,
        thickness: 0.75,
        gap_size: 0.125,
        tongue_groove_depth: 0.375,
    }
}

#[test]
fn test_single_door() {
    let door = CabinetOpening::door("DOOR1", 12.0, 24.0).with_overlay(Overlay::uniform(0.5));
    let cutlist = calculate_cutlist(&[door], &shop_settings());
    assert_eq!(cutlist.len(), 3);

    let rail = &cutlist[0];
    assert_eq!(rail.piece, PieceKind::Rail);
    assert_eq!(rail.name, "DOOR1_rails");
    assert_eq!(rail.length, 8.75);
    assert_eq!(rail.width, 2.5);
    assert_eq!(rail.quantity, 2);

    let stile = &cutlist[1];
    assert_eq!(stile.piece, PieceKind::Stile);
    assert_eq!(stile.length, 25.0);
    assert_eq!(stile.quantity, 2);

    let panel = &cutlist[2];
    assert_eq!(panel.piece, PieceKind::Panel);
    assert_eq!(panel.length, 20.75);
    assert_eq!(panel.width, 8.75);
    assert_eq!(panel.quantity, 1);
}

#[test]
fn test_door_pair_splits_width() {
    let doors = CabinetOpening::door("DOOR1", 24.0, 30.0)
        .with_overlay(Overlay::uniform(0.5))
        .with_quantity(2);
    let cutlist = calculate_cutlist(&[doors], &shop_settings());

    assert_eq!(cutlist[0].length, 8.1875);
    assert_eq!(cutlist[0].quantity, 4);
    assert_eq!(cutlist[1].length, 31.0);
    assert_eq!(cutlist[1].quantity, 4);
    assert_eq!(cutlist[2].length, 26.75);
    assert_eq!(cutlist[2].width, 8.1875);
    assert_eq!(cutlist[2].quantity, 2);
}

#[test]
fn test_envelope_rounds_up_to_sixteenth() {
    // 24.2 + 0.6 = 24.8, next sixteenth is 24.8125
    let door = CabinetOpening::door("DOOR1", 12.1, 24.2).with_overlay(Overlay::uniform(0.3));
    let cutlist = calculate_cutlist(&[door], &shop_settings());
    assert_eq!(cutlist[1].length, 24.8125);
}

#[test]
fn test_thickness_copied_to_every_piece() {
    let settings = GlobalSettings {
        thickness: 0.625,
        ..shop_settings()
    };
    let door = CabinetOpening::door("DOOR1", 12.0, 24.0);
    let cutlist = calculate_cutlist(&[door], &settings);
    assert!(cutlist.iter().all(|p| p.thickness == 0.625));
}

#[test]
fn test_identical_openings_merge() {
    let door = CabinetOpening::door("UPPER", 12.0, 24.0).with_overlay(Overlay::uniform(0.5));
    let cutlist = calculate_cutlist(&[door.clone(), door], &shop_settings());
    assert_eq!(cutlist.len(), 3);
    assert_eq!(cutlist[0].quantity, 4);
    assert_eq!(cutlist[1].quantity, 4);
    assert_eq!(cutlist[2].quantity, 2);
}

#[test]
fn test_different_names_stay_separate() {
    let a = CabinetOpening::door("A", 12.0, 24.0);
    let b = CabinetOpening::door("B", 12.0, 24.0);
    let cutlist = calculate_cutlist(&[a, b], &shop_settings());
    assert_eq!(cutlist.len(), 6);
    assert_eq!(cutlist[3].name, "B_rails");
}

#[test]
fn test_calculation_is_idempotent() {
    let openings = vec![
        CabinetOpening::door("DOOR1", 15.5, 30.25).with_quantity(2),
        CabinetOpening::drawer("DRWR1", 15.5, 6.0),
    ];
    let first = calculate_cutlist(&openings, &shop_settings());
    let second = calculate_cutlist(&openings, &shop_settings());
    assert_eq!(first, second);
}
