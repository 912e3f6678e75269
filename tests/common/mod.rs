// tests/common/mod.rs

#![allow(dead_code)]

use lexiform::error::{AppError, AppResult};
use lexiform::service::{DocumentService, GenerateRequest, RedraftRequest, RedraftResponse};
use lexiform::session::{self, DocumentSession};

pub const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";

/// NDA-style document type: date with derived parts, a select, two
/// parties, signature uploads.
pub fn nda_config_json5() -> &'static str {
    r#"
    {
      document_type: "nda",
      title: "NDA Agreement",
      pdf_file_name: "NDA_Agreement.pdf",
      sections: [
        {
          section_id: "agreement_details",
          title: "Agreement Details",
          open_by_default: true,
          fields: [
            {
              key: "EFFECTIVE_DATE", label: "Effective Date", type: "date",
              default: "2026-08-06",
              derived: [
                { key: "EFFECTIVE_DAY", part: "day" },
                { key: "EFFECTIVE_MONTH", part: "month_name" },
                { key: "EFFECTIVE_YEAR", part: "year" }
              ]
            },
            {
              key: "PROPOSED_TRANSACTION", label: "Proposed Transaction", type: "select",
              choices: [
                "Merger or Acquisition",
                "Strategic Partnership",
                "Software Licensing",
                "Investment Review"
              ]
            }
          ]
        },
        {
          section_id: "party_1_details",
          title: "Party 1 Details",
          fields: [
            { key: "PARTY_1_NAME", label: "Party 1 Name", type: "text" },
            { key: "PARTY_1_ADDRESS", label: "Party 1 Address", type: "text" },
            { key: "PARTY_1_SIGNATURE", label: "Party 1 Signature", type: "signature" }
          ]
        },
        {
          section_id: "party_2_details",
          title: "Party 2 Details",
          fields: [
            { key: "PARTY_2_NAME", label: "Party 2 Name", type: "text" },
            { key: "PARTY_2_SIGNATURE", label: "Party 2 Signature", type: "signature" }
          ]
        }
      ],
      aliases: {
        "effective.date": "EFFECTIVE_DATE",
        "effective.day": "EFFECTIVE_DAY",
        "effective.month": "EFFECTIVE_MONTH",
        "effective.year": "EFFECTIVE_YEAR",
        "party.1.name": "PARTY_1_NAME",
        "party.1.address": "PARTY_1_ADDRESS",
        "party.1.signature": "PARTY_1_SIGNATURE",
        "party.2.name": "PARTY_2_NAME",
        "party.2.signature": "PARTY_2_SIGNATURE",
        "proposed.transaction": "PROPOSED_TRANSACTION"
      }
    }
    "#
}

/// Founders-style document type: case-sensitive alias lookup, no
/// signatures.
pub fn founders_config_json5() -> &'static str {
    r#"
    {
      document_type: "founders",
      title: "Founder Agreement",
      alias_lookup: "sensitive",
      sections: [
        {
          section_id: "company_details",
          title: "Company Details",
          open_by_default: true,
          fields: [
            { key: "COMPANY_NAME", label: "Company Name", type: "text" },
            { key: "COMPANY_ADDRESS", label: "Company Address", type: "text" },
            { key: "COMPANY_SIGNATORY_NAME", label: "Authorized Signatory Name", type: "text" }
          ]
        },
        {
          section_id: "founder_details",
          title: "Founder Details",
          fields: [
            { key: "FOUNDER_NAME", label: "Founder Name", type: "text", required: true },
            { key: "FOUNDER_SALARY", label: "Salary", type: "text", validators: ["regex:^[0-9]*$"] },
            { key: "JURISDICTION_CITY", label: "Jurisdiction City", type: "text", default: "Chennai" }
          ]
        }
      ],
      aliases: {
        "company.name": "COMPANY_NAME",
        "company.address": "COMPANY_ADDRESS",
        "authorized.signatory.name": "COMPANY_SIGNATORY_NAME",
        "founder.name": "FOUNDER_NAME",
        "founder.salary": "FOUNDER_SALARY",
        "jurisdiction.city": "JURISDICTION_CITY"
      }
    }
    "#
}

pub fn nda_template() -> &'static str {
    "<h1>NON-DISCLOSURE AGREEMENT</h1>\n\
     <p>Entered into on this {{ effective.day }} day of {{ effective.month }}, \
     {{ effective.year }}, between {{ party.1.name }}, located at \
     {{ party.1.address }}, and {{ party.2.name }}, regarding a \
     {{ proposed.transaction }}.</p>\n\
     <p>Signed: {{ party.1.signature }} {{ party.2.signature }}</p>"
}

/// A session with the NDA config and its template already loaded.
pub fn nda_session() -> DocumentSession {
    let mut s = session::load_session_from_str(nda_config_json5()).expect("nda config loads");
    session::template_loaded(&mut s, nda_template());
    s
}

/// In-memory stand-in for the document service.
pub struct FakeService {
    pub template: Option<String>,
    pub pdf_bytes: Vec<u8>,
    pub fail_generate: bool,
}

impl FakeService {
    pub fn with_template(template: &str) -> Self {
        Self {
            template: Some(template.to_string()),
            pdf_bytes: b"%PDF-1.7 fake".to_vec(),
            fail_generate: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            template: None,
            pdf_bytes: Vec::new(),
            fail_generate: true,
        }
    }
}

impl DocumentService for FakeService {
    fn fetch_template(&self, _document_type: &str) -> AppResult<String> {
        match &self.template {
            Some(t) => Ok(t.clone()),
            None => Err(AppError::TemplateUnavailable { status: 404 }),
        }
    }

    fn generate(&self, _req: &GenerateRequest) -> AppResult<Vec<u8>> {
        if self.fail_generate {
            return Err(AppError::GenerateRejected { status: 500 });
        }
        Ok(self.pdf_bytes.clone())
    }

    fn redraft(&self, req: &RedraftRequest) -> AppResult<RedraftResponse> {
        Ok(RedraftResponse {
            redrafted_html: format!("<div data-redrafted=\"true\">{}</div>", req.html),
        })
    }
}
