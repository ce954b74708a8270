use super::*;

use disc_check_core::Msf;

fn verdict(kind: SectorKind, intact: bool) -> SectorVerdict {
    SectorVerdict {
        kind,
        intact,
        address: Some(Msf([0x00, 0x02, 0x00])),
    }
}

#[test]
fn record_moves_one_sector_counter_per_call() {
    let mut report = ScanReport::new();
    report.record(&verdict(SectorKind::Mode1, true));
    report.record(&verdict(SectorKind::Mode1, false));
    report.record(&verdict(SectorKind::NonData, true));

    assert_eq!(report.mode1_sectors, 2);
    assert_eq!(report.mode1_errors, 1);
    assert_eq!(report.non_data_sectors, 1);
    assert_eq!(report.total_sectors, 3);
    assert_eq!(report.total_errors, 1);
    assert!(report.has_errors());
}

#[test]
fn record_tallies_each_kind_separately() {
    let mut report = ScanReport::new();
    report.record(&verdict(SectorKind::Mode0, false));
    report.record(&verdict(SectorKind::Mode2Form1, false));
    report.record(&verdict(SectorKind::Mode2Form2, true));

    assert_eq!(report.mode0_sectors, 1);
    assert_eq!(report.mode0_errors, 1);
    assert_eq!(report.mode2_form1_sectors, 1);
    assert_eq!(report.mode2_form1_errors, 1);
    assert_eq!(report.mode2_form2_sectors, 1);
    assert_eq!(report.mode2_form2_errors, 0);
    assert_eq!(report.total_errors, 2);
}

#[test]
fn summary_lines_keep_the_fixed_order() {
    let mut report = ScanReport::new();
    report.record(&verdict(SectorKind::Mode1, true));
    report.image_edc = 0x1234_5678;
    report.image_crc32 = 0x9ABC_DEF0;

    let rendered = report.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Non-data sectors........ 0");
    assert_eq!(lines[1], "Mode 0 sectors.......... 0");
    assert_eq!(lines[2], "\twith errors..... 0");
    assert_eq!(lines[3], "Mode 1 sectors.......... 1");
    assert_eq!(lines[5], "Mode 2 form 1 sectors... 0");
    assert_eq!(lines[7], "Mode 2 form 2 sectors... 0");
    assert_eq!(lines[9], "Total sectors........... 1");
    assert_eq!(lines[10], "Total errors............ 0");
    assert_eq!(lines[11], "Image EDC............... 12345678");
    assert_eq!(lines[12], "Image CRC32............. 9ABCDEF0");
}

#[test]
fn report_serializes_to_flat_json() {
    let mut report = ScanReport::new();
    report.record(&verdict(SectorKind::Mode2Form2, false));

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["mode2_form2_sectors"], 1);
    assert_eq!(value["mode2_form2_errors"], 1);
    assert_eq!(value["total_sectors"], 1);
    assert_eq!(value["total_errors"], 1);
}
