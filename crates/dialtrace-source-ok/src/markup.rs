//! Recovery page parsing
//!
//! After a failed login, Odnoklassniki serves one of two recovery layouts.
//! Each carries a distinct `data-l` marker on its registration container:
//! one offers to restore access through the contact (an account exists), the
//! other sends the visitor back home (no account for this number).

use std::sync::LazyLock;

use dialtrace_source_api::UNKNOWN;
use scraper::{
    ElementRef,
    Html,
    Selector,
};

static OFFER_CONTACT_MARKER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[data-l="registrationContainer,offer_contact_rest"]"#)
        .expect("Invalid selector")
});

static HOME_MARKER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[data-l="registrationContainer,home_rest"]"#).expect("Invalid selector")
});

static ACCOUNT_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.ext-registration_tx.taCenter").expect("Invalid selector"));

static USERNAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.ext-registration_username_header").expect("Invalid selector")
});

static DETAIL_LINE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.lstp-t").expect("Invalid selector"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub name: String,
    pub profile_info: String,
    pub registered: String,
}

impl Default for AccountInfo {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            profile_info: UNKNOWN.to_string(),
            registered: UNKNOWN.to_string(),
        }
    }
}

/// What the recovery page says about the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryPage {
    /// The site offers recovery through this contact: an account exists.
    Associated(AccountInfo),
    /// The site sends the visitor home: no account uses this number.
    NotAssociated,
    /// Neither layout was recognised.
    Ambiguous,
}

pub fn parse_recovery_page(html: &str) -> RecoveryPage {
    let document = Html::parse_document(html);

    if document.select(&OFFER_CONTACT_MARKER).next().is_some() {
        let account = document
            .select(&ACCOUNT_BLOCK)
            .next()
            .map(account_info)
            .unwrap_or_default();
        return RecoveryPage::Associated(account);
    }

    if document.select(&HOME_MARKER).next().is_some() {
        return RecoveryPage::NotAssociated;
    }

    RecoveryPage::Ambiguous
}

fn account_info(block: ElementRef<'_>) -> AccountInfo {
    let name = block
        .select(&USERNAME)
        .next()
        .map(text_of)
        .unwrap_or_else(|| UNKNOWN.to_string());

    let details: Vec<String> = block.select(&DETAIL_LINE).take(2).map(text_of).collect();
    let (profile_info, registered) = match details.as_slice() {
        [profile_info, registered] => (profile_info.clone(), registered.clone()),
        _ => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    AccountInfo {
        name,
        profile_info,
        registered,
    }
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
