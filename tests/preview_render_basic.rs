// tests/preview_render_basic.rs

mod common;

use common::{nda_session, PNG_HEADER};
use lexiform::preview::render::PreviewMode;
use lexiform::session;

#[test]
fn fresh_session_preview_shows_blanks_and_derived_dates() {
    let s = nda_session();
    let html = session::preview_html(&s, PreviewMode::Interactive);

    // Derived date parts echo their seeded values instead of blanks.
    assert!(html.contains("this 6 day of August, 2026"));

    // Unfilled text fields become interactive markers.
    assert!(html.contains(r#"data-key="PARTY_1_NAME""#));
    assert!(html.contains("[Party 1 Name]"));

    // Unfilled signatures become upload markers.
    assert!(html.contains(r#"data-key="PARTY_1_SIGNATURE_UPLOAD""#));
    assert!(html.contains("[Upload Signature]"));

    // Every placeholder resolved.
    assert!(!html.contains("{{"));
}

#[test]
fn filling_fields_replaces_markers_with_escaped_text() {
    let mut s = nda_session();
    session::set_field(&mut s, "PARTY_1_NAME", "Acme & Sons <Pvt>").unwrap();

    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains("Acme &amp; Sons &lt;Pvt&gt;"));
    assert!(!html.contains(r#"data-key="PARTY_1_NAME""#));
}

#[test]
fn script_injection_is_neutralized() {
    let mut s = nda_session();
    session::set_field(&mut s, "PARTY_2_NAME", "<script>alert('x')</script>").unwrap();

    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn signature_upload_renders_exact_data_uri() {
    let mut s = nda_session();
    session::set_signature_from_bytes(&mut s, "PARTY_1_SIGNATURE", PNG_HEADER).unwrap();

    let uri = s
        .form
        .get("PARTY_1_SIGNATURE")
        .as_image()
        .expect("stored as image")
        .to_string();

    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains(&format!(r#"<img src="{uri}" class="signature-image""#)));
}

#[test]
fn select_choice_flows_into_preview() {
    let mut s = nda_session();
    session::set_field(&mut s, "PROPOSED_TRANSACTION", "Software Licensing").unwrap();

    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains("a Software Licensing."));
}

#[test]
fn simple_mode_renders_static_underlines() {
    let s = nda_session();
    let html = session::preview_html(&s, PreviewMode::Simple);

    assert!(html.contains("<u>__________</u>"));
    assert!(!html.contains("data-key"));
    assert!(!html.contains("{{"));
}

#[test]
fn preview_is_idempotent_across_repeated_calls() {
    let mut s = nda_session();
    session::set_field(&mut s, "PARTY_1_NAME", "Acme").unwrap();
    session::set_signature_from_bytes(&mut s, "PARTY_2_SIGNATURE", PNG_HEADER).unwrap();

    let a = session::preview_html(&s, PreviewMode::Interactive);
    let b = session::preview_html(&s, PreviewMode::Interactive);
    assert_eq!(a, b);
}

#[test]
fn loading_and_failed_templates_render_fixed_fallbacks() {
    let mut s = lexiform::session::load_session_from_str(common::nda_config_json5()).unwrap();

    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains("Loading template"));

    session::template_failed(&mut s);
    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains("preview-error"));

    // The form stays editable through a failed load.
    session::set_field(&mut s, "PARTY_1_NAME", "Acme").unwrap();
    assert_eq!(s.form.get("PARTY_1_NAME").as_text(), Some("Acme"));
}

#[test]
fn unknown_tokens_degrade_to_synthesized_blanks() {
    let mut s = nda_session();
    session::template_loaded(&mut s, "Before {{ some-weird.token! }} after.");

    let html = session::preview_html(&s, PreviewMode::Interactive);
    assert!(html.contains(r#"data-key="SOME_WEIRD_TOKEN""#));
    assert!(html.contains("[Some Weird Token]"));
    assert!(!html.contains("{{"));
}
