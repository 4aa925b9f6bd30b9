use cabinetr_cutlist::{
    compute_layout, CabinetOpening, CutlistCalculator, FormulaOptions, FrameMember,
    GlobalSettings, Overlay,
};

fn settings() -> GlobalSettings {
    GlobalSettings {
        rail_width: 2.0,
        stile_width: 2.5,
        thickness: 0.75,
        gap_size: 0.125,
        tongue_groove_depth: 0.375,
    }
}

fn door() -> CabinetOpening {
    CabinetOpening::door("DOOR1", 12.0, 24.0).with_overlay(Overlay::uniform(0.5))
}

#[test]
fn test_canonical_uses_stile_for_panel_height() {
    let layout = compute_layout(&door(), &settings(), &FormulaOptions::canonical());
    // 25 - 2 * 2.5 + 0.75
    assert_eq!(layout.units[0].panel_length, 20.75);
}

#[test]
fn test_rail_member_for_panel_height() {
    let options = FormulaOptions::canonical().with_panel_height_member(FrameMember::Rail);
    let layout = compute_layout(&door(), &settings(), &options);
    // 25 - 2 * 2.0 + 0.75
    assert_eq!(layout.units[0].panel_length, 21.75);
}

#[test]
fn test_without_tongue_groove() {
    let options = FormulaOptions::canonical().without_tongue_groove();
    let layout = compute_layout(&door(), &settings(), &options);
    assert_eq!(layout.units[0].rail_length, 8.0);
    assert_eq!(layout.units[0].panel_length, 20.0);
}

#[test]
fn test_project_pieces_skip_rounding() {
    let door = CabinetOpening::door("DOOR1", 12.1, 24.2).with_overlay(Overlay::uniform(0.3));
    let layout = compute_layout(&door, &settings(), &FormulaOptions::project_pieces());
    assert!((layout.total_height - 24.8).abs() < 1e-9);
    assert!((layout.units[0].stile_length - 24.8).abs() < 1e-9);
}

#[test]
fn test_calculator_with_options() {
    let calculator = CutlistCalculator::with_options(settings(), FormulaOptions::diagram());
    assert_eq!(calculator.options().panel_height_member, FrameMember::Rail);
    let pieces = calculator.calculate(&[door()]);
    assert_eq!(pieces[2].length, 21.75);
}
