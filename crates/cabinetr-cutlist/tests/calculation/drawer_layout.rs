use cabinetr_cutlist::{calculate_cutlist, CabinetOpening, GlobalSettings, Overlay};

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
fn test_single_drawer_front() {
    let drawer = CabinetOpening::drawer("DRWR1", 18.0, 6.0).with_overlay(Overlay::uniform(0.5));
    let cutlist = calculate_cutlist(&[drawer], &shop_settings());

    assert_eq!(cutlist[0].name, "DRWR1_rails");
    assert_eq!(cutlist[0].length, 14.75);
    assert_eq!(cutlist[0].quantity, 2);
    assert_eq!(cutlist[1].length, 7.0);
    assert_eq!(cutlist[1].quantity, 2);
    assert_eq!(cutlist[2].length, 2.75);
    assert_eq!(cutlist[2].width, 14.75);
    assert_eq!(cutlist[2].quantity, 1);
}

#[test]
fn test_stacked_drawers_split_height() {
    let drawers = CabinetOpening::drawer("DRWR1", 20.0, 12.0)
        .with_overlay(Overlay::uniform(0.5))
        .with_quantity(3);
    let cutlist = calculate_cutlist(&[drawers], &shop_settings());

    // rails span the full width
    assert_eq!(cutlist[0].length, 16.75);
    assert_eq!(cutlist[0].quantity, 6);
    assert_eq!(cutlist[1].length, 4.25);
    assert_eq!(cutlist[1].quantity, 6);
    assert_eq!(cutlist[2].quantity, 3);
}

#[test]
fn test_narrow_front_goes_negative() {
    // 2" of height cannot hold two 2.5" stiles; the result is reported, not rejected
    let drawer = CabinetOpening::drawer("TINY", 18.0, 2.0);
    let cutlist = calculate_cutlist(&[drawer], &shop_settings());
    assert!(cutlist[2].length < 0.0);
}

#[test]
fn test_zero_gap_quantity_one() {
    let settings = GlobalSettings {
        gap_size: 0.0,
        ..shop_settings()
    };
    let drawer = CabinetOpening::drawer("DRWR1", 18.0, 8.0);
    let cutlist = calculate_cutlist(&[drawer], &settings);
    assert_eq!(cutlist[1].length, 8.0);
}
