use cabinetr_cutlist::{
    calculate_cutlist, compute_layout, CabinetOpening, FormulaOptions, GlobalSettings, PieceKind,
};

fn stacked(ratios: Vec<f64>) -> CabinetOpening {
    // 12" of usable height once the 1/8" gap is taken out
    CabinetOpening::drawer("BANK", 20.0, 12.125)
        .with_quantity(2)
        .with_ratios(ratios)
}

#[test]
fn test_custom_split_emits_unit_triples() {
    let cutlist = calculate_cutlist(&[stacked(vec![25.0, 75.0])], &GlobalSettings::default());

    // both drawers share the full-width rail, so the rails merge
    assert_eq!(cutlist.len(), 5);
    assert_eq!(cutlist[0].piece, PieceKind::Rail);
    assert_eq!(cutlist[0].length, 18.75);
    assert_eq!(cutlist[0].quantity, 4);

    assert_eq!(cutlist[1].piece, PieceKind::Stile);
    assert_eq!(cutlist[1].length, 3.0);
    assert_eq!(cutlist[1].quantity, 2);
    assert_eq!(cutlist[2].piece, PieceKind::Panel);
    assert_eq!(cutlist[2].length, 1.75);
    assert_eq!(cutlist[2].quantity, 1);

    assert_eq!(cutlist[3].length, 9.0);
    assert_eq!(cutlist[3].quantity, 2);
    assert_eq!(cutlist[4].length, 7.75);
    assert_eq!(cutlist[4].width, 18.75);
}

#[test]
fn test_custom_split_total_height_is_preserved() {
    let layout = compute_layout(
        &stacked(vec![16.67, 83.33]),
        &GlobalSettings::default(),
        &FormulaOptions::project_pieces(),
    );
    let heights = layout.panel_heights.expect("custom split applied");
    let total: f64 = heights.iter().sum();
    assert!((total - 12.0).abs() < 1e-9);
}

#[test]
fn test_invalid_sum_falls_back_to_even() {
    let cutlist = calculate_cutlist(&[stacked(vec![30.0, 60.0])], &GlobalSettings::default());
    assert_eq!(cutlist.len(), 3);
    assert_eq!(cutlist[1].length, 6.0);
    assert_eq!(cutlist[1].quantity, 4);
}

#[test]
fn test_ratio_count_mismatch_falls_back_to_even() {
    let opening = stacked(vec![20.0, 30.0, 50.0]);
    let layout = compute_layout(&opening, &GlobalSettings::default(), &FormulaOptions::canonical());
    assert!(layout.panel_heights.is_none());
    assert_eq!(layout.units.len(), 1);
    assert_eq!(layout.units[0].count, 2);
}

#[test]
fn test_doors_ignore_ratios() {
    let mut opening = stacked(vec![25.0, 75.0]);
    opening.is_door = true;
    let layout = compute_layout(&opening, &GlobalSettings::default(), &FormulaOptions::canonical());
    assert!(!layout.is_custom_split());
}
