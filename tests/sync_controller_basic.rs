// tests/sync_controller_basic.rs

mod common;

use common::nda_session;
use lexiform::preview::render::PreviewMode;
use lexiform::session;
use lexiform::sync::{PreviewEvent, SyncController, SyncEffect, TargetInfo};

fn blank(key: &str) -> TargetInfo {
    TargetInfo::new("placeholder-blank", Some(key.to_string()))
}

#[test]
fn click_on_rendered_blank_focuses_its_control_and_expands_its_section() {
    let s = nda_session();

    // The marker the user clicks actually exists in the rendered preview.
    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains(r#"data-key="PARTY_2_NAME""#));

    let mut c = SyncController::attach(session::session_form_layout(&s));
    assert!(!c.section_is_open("party_2_details"));

    let fx = c.handle(PreviewEvent::Click(blank("PARTY_2_NAME")));
    assert_eq!(
        fx,
        vec![
            SyncEffect::ExpandSection {
                section_id: "party_2_details".into()
            },
            SyncEffect::Focus {
                control: "PARTY_2_NAME".into()
            },
        ]
    );

    // The section stays expanded afterwards.
    assert!(c.section_is_open("party_2_details"));
}

#[test]
fn click_inside_an_open_section_skips_the_expand_effect() {
    let s = nda_session();
    let mut c = SyncController::attach(session::session_form_layout(&s));

    // agreement_details is open by default.
    let fx = c.handle(PreviewEvent::Click(blank("PROPOSED_TRANSACTION")));
    assert_eq!(
        fx,
        vec![SyncEffect::Focus {
            control: "PROPOSED_TRANSACTION".into()
        }]
    );
}

#[test]
fn hover_cycle_highlights_then_reverses() {
    let s = nda_session();
    let mut c = SyncController::attach(session::session_form_layout(&s));

    let fx = c.handle(PreviewEvent::PointerOver(blank("PARTY_1_ADDRESS")));
    assert_eq!(
        fx,
        vec![SyncEffect::Highlight {
            control: "PARTY_1_ADDRESS".into()
        }]
    );

    let fx = c.handle(PreviewEvent::PointerOut(blank("PARTY_1_ADDRESS")));
    assert_eq!(
        fx,
        vec![SyncEffect::Unhighlight {
            control: "PARTY_1_ADDRESS".into()
        }]
    );
}

#[test]
fn upload_marker_click_targets_the_file_control() {
    let s = nda_session();
    let mut c = SyncController::attach(session::session_form_layout(&s));

    let target = TargetInfo::new(
        "placeholder-blank-file",
        Some("PARTY_1_SIGNATURE_UPLOAD".to_string()),
    );
    let fx = c.handle(PreviewEvent::Click(target));

    assert_eq!(
        fx,
        vec![
            SyncEffect::ExpandSection {
                section_id: "party_1_details".into()
            },
            SyncEffect::Focus {
                control: "PARTY_1_SIGNATURE_UPLOAD".into()
            },
        ]
    );
}

#[test]
fn re_render_does_not_require_re_attach() {
    let mut s = nda_session();
    let mut c = SyncController::attach(session::session_form_layout(&s));

    // Fill a field; the preview subtree is rebuilt wholesale.
    session::set_field(&mut s, "PARTY_1_NAME", "Acme").unwrap();
    let _ = session::preview_html(&s, PreviewMode::Interactive);

    // The delegated controller keeps working against the new markers.
    let fx = c.handle(PreviewEvent::Click(blank("PARTY_2_NAME")));
    assert!(matches!(fx.last(), Some(SyncEffect::Focus { .. })));
}

#[test]
fn detach_cleans_up_outstanding_highlights() {
    let s = nda_session();
    let mut c = SyncController::attach(session::session_form_layout(&s));

    c.handle(PreviewEvent::PointerOver(blank("PARTY_1_NAME")));
    c.handle(PreviewEvent::PointerOver(blank("PARTY_2_NAME")));

    let fx = c.detach();
    assert_eq!(fx.len(), 2);
    assert!(fx.iter().all(|e| matches!(e, SyncEffect::Unhighlight { .. })));

    // Dead after unmount.
    assert!(c.handle(PreviewEvent::Click(blank("PARTY_1_NAME"))).is_empty());
}
