//! Field-descriptor table for [`AnalysisRecord`].
//!
//! Every consumer that walks a record field by field (the detail view, the
//! per-field risk rule, the tabular export) goes through [`FIELDS`] and
//! [`Field::value`] instead of reflecting over the record. Adding a field to the
//! schema means adding a `Field` variant, a table row and an accessor arm, and
//! the compiler points at each of them.

use serde::Serialize;
use serde_json::{json, Value};
use strum_macros::{EnumIter, IntoStaticStr};

use super::types::{AnalysisRecord, DomainSimilarity, MlScore};
use crate::classify::RiskRule;

/// Version of the field table. Bump when a row is added, removed or reordered.
pub const SCHEMA_VERSION: u32 = 1;

/// Separator used when a list-valued field is shown to a person.
pub const LIST_SEPARATOR: &str = ", ";

/// Known fields of an analysis record, in the service's wire order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Url,
    Blacklisted,
    BlacklistSource,
    SuspiciousNumbers,
    ExcessiveSubdomains,
    SpecialChars,
    DomainCreationDate,
    DomainAgeDays,
    DynamicDns,
    DnsRecords,
    SslValid,
    SslIssuer,
    SslExpirationDate,
    SslDomainMatch,
    Redirects,
    SimilarDomains,
    FormsFound,
    LoginFieldsFound,
    SensitiveFieldsFound,
    SuspiciousImages,
    MlScores,
    Id,
    Timestamp,
}

/// Static metadata for one record field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub field: Field,
    /// Human-readable column/row label
    pub label: &'static str,
    /// Per-field risk rule; `None` means the field is never highlighted
    pub risk: Option<RiskRule>,
    /// Why the field matters, shown next to the value in the detail view
    pub explanation: Option<&'static str>,
}

/// The field table, one row per [`Field`] in declaration order.
pub static FIELDS: [FieldDescriptor; 23] = [
    FieldDescriptor {
        field: Field::Url,
        label: "URL",
        risk: None,
        explanation: None,
    },
    FieldDescriptor {
        field: Field::Blacklisted,
        label: "Blacklisted",
        risk: Some(RiskRule::WhenTrue),
        explanation: Some(
            "URL found in known phishing lists, meaning security organizations have already identified it as malicious.",
        ),
    },
    FieldDescriptor {
        field: Field::BlacklistSource,
        label: "Blacklist Source",
        risk: None,
        explanation: Some("Source that identified this URL as malicious."),
    },
    FieldDescriptor {
        field: Field::SuspiciousNumbers,
        label: "Suspicious Numbers",
        risk: Some(RiskRule::WhenTrue),
        explanation: Some(
            "Digits standing in for letters (such as '1' for 'l') are a common trick for imitating legitimate domains.",
        ),
    },
    FieldDescriptor {
        field: Field::ExcessiveSubdomains,
        label: "Excessive Subdomains",
        risk: Some(RiskRule::WhenTrue),
        explanation: Some(
            "Many subdomains can hide the real domain or make a URL look like it belongs to a legitimate organization.",
        ),
    },
    FieldDescriptor {
        field: Field::SpecialChars,
        label: "Special Chars",
        risk: Some(RiskRule::WhenTrue),
        explanation: Some(
            "Special characters in URLs can confuse users or slip past browser and filter checks.",
        ),
    },
    FieldDescriptor {
        field: Field::DomainCreationDate,
        label: "Domain Creation Date",
        risk: None,
        explanation: Some(
            "Registration date of the domain. Recently created domains are frequently used for short-lived phishing campaigns.",
        ),
    },
    FieldDescriptor {
        field: Field::DomainAgeDays,
        label: "Domain Age Days",
        risk: Some(RiskRule::YoungerThanDays(crate::config::YOUNG_DOMAIN_DAYS)),
        explanation: Some(
            "Age of the domain in days. Domains younger than 30 days are especially suspicious, since most phishing sites are taken down quickly.",
        ),
    },
    FieldDescriptor {
        field: Field::DynamicDns,
        label: "Dynamic DNS",
        risk: Some(RiskRule::WhenTrue),
        explanation: Some(
            "Dynamic DNS services are often used to create throwaway domains or to move infrastructure quickly.",
        ),
    },
    FieldDescriptor {
        field: Field::DnsRecords,
        label: "DNS Records",
        risk: None,
        explanation: Some(
            "Incomplete or inconsistent DNS records can point to temporary infrastructure typical of fraudulent sites.",
        ),
    },
    FieldDescriptor {
        field: Field::SslValid,
        label: "SSL Valid",
        risk: Some(RiskRule::WhenExplicitlyFalse),
        explanation: Some(
            "An invalid or missing certificate means the connection is not secured and the site may be impersonated.",
        ),
    },
    FieldDescriptor {
        field: Field::SslIssuer,
        label: "SSL Issuer",
        risk: None,
        explanation: Some(
            "Authority that issued the certificate. Free or self-signed certificates are more common on malicious sites.",
        ),
    },
    FieldDescriptor {
        field: Field::SslExpirationDate,
        label: "SSL Expiration Date",
        risk: None,
        explanation: Some(
            "Expiry date of the certificate. Expired certificates indicate neglect or a deliberate impersonation attempt.",
        ),
    },
    FieldDescriptor {
        field: Field::SslDomainMatch,
        label: "SSL Domain Match",
        risk: Some(RiskRule::WhenExplicitlyFalse),
        explanation: Some(
            "When the certificate's domain does not match the site's domain, the site may be faking its identity.",
        ),
    },
    FieldDescriptor {
        field: Field::Redirects,
        label: "Redirects",
        risk: None,
        explanation: Some(
            "Redirects across different domains can hide the real origin of a malicious page or alter the URL shown.",
        ),
    },
    FieldDescriptor {
        field: Field::SimilarDomains,
        label: "Similar Domains",
        risk: Some(RiskRule::NonEmpty),
        explanation: Some(
            "Domains resembling well-known brands suggest typosquatting or domain spoofing.",
        ),
    },
    FieldDescriptor {
        field: Field::FormsFound,
        label: "Forms Found",
        risk: Some(RiskRule::Positive),
        explanation: Some(
            "Forms can be used to collect sensitive data. Phishing sites usually carry forms for credential theft.",
        ),
    },
    FieldDescriptor {
        field: Field::LoginFieldsFound,
        label: "Login Fields Found",
        risk: Some(RiskRule::WhenTrue),
        explanation: Some(
            "Password fields on a suspicious site are a strong indicator of credential harvesting.",
        ),
    },
    FieldDescriptor {
        field: Field::SensitiveFieldsFound,
        label: "Sensitive Fields Found",
        risk: None,
        explanation: Some(
            "Fields asking for card numbers, passwords or national IDs are high risk on a suspicious site.",
        ),
    },
    FieldDescriptor {
        field: Field::SuspiciousImages,
        label: "Suspicious Images",
        risk: None,
        explanation: Some(
            "Images imitating well-known brand logos lend a fraudulent site an appearance of legitimacy.",
        ),
    },
    FieldDescriptor {
        field: Field::MlScores,
        label: "ML Scores",
        risk: None,
        explanation: Some("Class probabilities assigned to the URL by the service's ML model."),
    },
    FieldDescriptor {
        field: Field::Id,
        label: "ID",
        risk: None,
        explanation: None,
    },
    FieldDescriptor {
        field: Field::Timestamp,
        label: "Timestamp",
        risk: None,
        explanation: None,
    },
];

impl Field {
    /// Wire name of the field (`ssl_valid`, `ml_scores`, ...).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Looks a field up by its wire name.
    pub fn from_name(name: &str) -> Option<Field> {
        FIELDS
            .iter()
            .map(|d| d.field)
            .find(|field| field.name() == name)
    }

    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    /// Typed view of this field's value in `record`.
    pub fn value(self, record: &AnalysisRecord) -> FieldValue<'_> {
        match self {
            Field::Url => FieldValue::Text(&record.url),
            Field::Blacklisted => FieldValue::Flag(record.blacklisted),
            Field::BlacklistSource => FieldValue::OptionalText(record.blacklist_source.as_deref()),
            Field::SuspiciousNumbers => FieldValue::Flag(record.suspicious_numbers),
            Field::ExcessiveSubdomains => FieldValue::Flag(record.excessive_subdomains),
            Field::SpecialChars => FieldValue::Flag(record.special_chars),
            Field::DomainCreationDate => {
                FieldValue::OptionalText(record.domain_creation_date.as_deref())
            }
            Field::DomainAgeDays => FieldValue::Integer(record.domain_age_days),
            Field::DynamicDns => FieldValue::Flag(record.dynamic_dns),
            Field::DnsRecords => FieldValue::TextList(&record.dns_records),
            Field::SslValid => FieldValue::OptionalFlag(record.ssl_valid),
            Field::SslIssuer => FieldValue::OptionalText(record.ssl_issuer.as_deref()),
            Field::SslExpirationDate => {
                FieldValue::OptionalText(record.ssl_expiration_date.as_deref())
            }
            Field::SslDomainMatch => FieldValue::OptionalFlag(record.ssl_domain_match),
            Field::Redirects => FieldValue::TextList(&record.redirects),
            Field::SimilarDomains => FieldValue::Similarities(&record.similar_domains),
            Field::FormsFound => FieldValue::Integer(Some(i64::from(record.forms_found))),
            Field::LoginFieldsFound => FieldValue::Flag(record.login_fields_found),
            Field::SensitiveFieldsFound => FieldValue::TextList(&record.sensitive_fields_found),
            Field::SuspiciousImages => FieldValue::TextList(&record.suspicious_images),
            Field::MlScores => FieldValue::MlScores(&record.ml_scores),
            Field::Id => FieldValue::Integer(record.id),
            Field::Timestamp => FieldValue::OptionalText(record.timestamp.as_deref()),
        }
    }
}

/// Borrowed, typed value of one record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    OptionalText(Option<&'a str>),
    Flag(bool),
    /// Optional boolean; `None` means the service could not evaluate it
    OptionalFlag(Option<bool>),
    Integer(Option<i64>),
    TextList(&'a [String]),
    Similarities(&'a [DomainSimilarity]),
    MlScores(&'a [MlScore]),
}

impl FieldValue<'_> {
    /// Whether the value is absent (unknown), as opposed to present-but-empty.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            FieldValue::OptionalText(None) | FieldValue::OptionalFlag(None) | FieldValue::Integer(None)
        )
    }

    /// Flattens the value to a single cell string.
    ///
    /// Returns `None` for absent values. Lists, including the structured ones,
    /// are rendered as a compact JSON array so an element containing a comma
    /// stays one element.
    pub fn render(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some((*s).to_string()),
            FieldValue::OptionalText(s) => s.map(str::to_string),
            FieldValue::Flag(b) => Some(b.to_string()),
            FieldValue::OptionalFlag(b) => b.map(|b| b.to_string()),
            FieldValue::Integer(n) => n.map(|n| n.to_string()),
            FieldValue::TextList(items) => Some(json!(items).to_string()),
            FieldValue::Similarities(items) => Some(
                Value::Array(
                    items
                        .iter()
                        .map(|s| json!({ "brand": s.brand, "distance": s.distance }))
                        .collect(),
                )
                .to_string(),
            ),
            FieldValue::MlScores(items) => Some(
                Value::Array(
                    items
                        .iter()
                        .map(|s| json!({ "label": s.label, "probability": s.probability }))
                        .collect(),
                )
                .to_string(),
            ),
        }
    }
}
