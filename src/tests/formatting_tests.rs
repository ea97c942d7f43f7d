use chrono::{Duration, Utc};

use crate::feedback::ToastKind;
use crate::formatting::theme::{format_status, status_color, toast_color, SemanticColor};
use crate::formatting::{convert_iso_date_to_pt_br, format_relative_time, truncate};
use crate::models::Status;

#[test]
fn test_iso_dates_to_pt_br() {
    assert_eq!(convert_iso_date_to_pt_br("2024-03-05T10:00:00Z"), "05/03/2024");
    assert_eq!(convert_iso_date_to_pt_br("2023-02-01T00:00:00.000Z"), "01/02/2023");
    assert_eq!(convert_iso_date_to_pt_br("2024-12-31"), "31/12/2024");
    assert_eq!(convert_iso_date_to_pt_br("ontem"), "ontem");
    assert_eq!(convert_iso_date_to_pt_br(""), "");
}

#[test]
fn test_relative_time() {
    let two_days = (Utc::now() - Duration::days(2)).to_rfc3339();
    assert_eq!(format_relative_time(&two_days), "2d atrás");

    let three_hours = (Utc::now() - Duration::hours(3)).to_rfc3339();
    assert_eq!(format_relative_time(&three_hours), "3h atrás");

    assert_eq!(format_relative_time(&Utc::now().to_rfc3339()), "agora");
    assert_eq!(format_relative_time("nope"), "-");
}

#[test]
fn test_truncate_is_char_safe() {
    assert_eq!(truncate("Plantão", 10), "Plantão");
    assert_eq!(truncate("Coordenação", 8), "Coord...");
    assert_eq!(truncate("ãããã", 3), "ããã");
}

#[test]
fn test_status_colors_and_labels() {
    assert_eq!(status_color(Status::Active), SemanticColor::StatusActive);
    assert_eq!(status_color(Status::Inactive), SemanticColor::StatusInactive);
    assert_eq!(toast_color(ToastKind::Warning), SemanticColor::Warning);
    assert_eq!(&*format_status(Status::Active), "◉ Ativo");
    assert_eq!(&*format_status(Status::Inactive), "○ Inativo");
}
