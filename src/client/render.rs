//! Plain-text cards for a [`ProfileRecord`], one per concern.

use crate::identity::ProfileRecord;
use std::fmt::Write as _;

#[must_use]
pub fn profile_card(record: &ProfileRecord) -> String {
    card(
        &record.full_name(),
        &[
            ("Username", record.username.clone()),
            ("Bio", record.bio.clone()),
            ("Email", record.email.clone()),
            ("Phone", record.phone.clone()),
            ("Avatar", record.avatar.clone()),
        ],
    )
}

#[must_use]
pub fn work_card(record: &ProfileRecord) -> String {
    card(
        "Work Information",
        &[
            ("Company", record.company.clone()),
            ("Job Title", record.job_title.clone()),
        ],
    )
}

#[must_use]
pub fn address_card(record: &ProfileRecord) -> String {
    let address = &record.address;
    card(
        "Address",
        &[
            ("Street", address.street.clone()),
            (
                "City",
                format!("{}, {} {}", address.city, address.state, address.zip_code),
            ),
            ("Country", address.country.clone()),
        ],
    )
}

#[must_use]
pub fn activity_card(record: &ProfileRecord) -> String {
    card(
        "Activity",
        &[
            ("Joined", record.joined_date.format("%Y-%m-%d").to_string()),
            (
                "Last Login",
                record.last_login.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
        ],
    )
}

/// All four cards separated by blank lines.
#[must_use]
pub fn profile_page(record: &ProfileRecord) -> String {
    [
        profile_card(record),
        work_card(record),
        address_card(record),
        activity_card(record),
    ]
    .join("\n")
}

fn card(title: &str, entries: &[(&str, String)]) -> String {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut out = format!("{title}\n{}\n", "-".repeat(title.chars().count().max(8)));
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ = writeln!(out, "  {key}:{padding} {value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Address;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn record() -> Option<ProfileRecord> {
        let joined = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).single()?;
        let last = Utc.with_ymd_and_hms(2024, 6, 7, 8, 9, 10).single()?;
        Some(ProfileRecord {
            id: Uuid::nil(),
            username: "alice".to_string(),
            email: "Ada.Lovelace12@proton.me".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            avatar: "https://avatars.githubusercontent.com/u/1".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: Address {
                street: "12 Maple Street".to_string(),
                city: "Salem".to_string(),
                state: "Oregon".to_string(),
                zip_code: "97301".to_string(),
                country: "Canada".to_string(),
            },
            company: "Atlas Labs".to_string(),
            job_title: "Lead Data Engineer".to_string(),
            bio: "developer, night owl 🚀".to_string(),
            joined_date: joined,
            last_login: last,
        })
    }

    #[test]
    fn profile_card_aligns_values() {
        let Some(record) = record() else {
            panic!("fixture dates are valid");
        };
        let card = profile_card(&record);
        assert!(card.starts_with("Ada Lovelace\n"));
        assert!(card.contains("  Username: alice\n"));
        assert!(card.contains("  Email:    Ada.Lovelace12@proton.me\n"));
    }

    #[test]
    fn address_card_joins_city_line() {
        let Some(record) = record() else {
            panic!("fixture dates are valid");
        };
        assert!(address_card(&record).contains("Salem, Oregon 97301"));
    }

    #[test]
    fn activity_card_formats_dates() {
        let Some(record) = record() else {
            panic!("fixture dates are valid");
        };
        let card = activity_card(&record);
        assert!(card.contains("Joined:     2023-01-02"));
        assert!(card.contains("Last Login: 2024-06-07 08:09:10 UTC"));
    }

    #[test]
    fn page_has_four_cards() {
        let Some(record) = record() else {
            panic!("fixture dates are valid");
        };
        let page = profile_page(&record);
        for title in ["Ada Lovelace", "Work Information", "Address", "Activity"] {
            assert!(page.contains(&format!("{title}\n")));
        }
    }
}
