//! Profile synthesizer.
//!
//! Every call builds a brand new record. The username is the only field taken
//! from the caller; everything else is drawn from the supplied RNG, so the same
//! username asked twice gives two unrelated profiles.

use crate::identity::catalog;
use chrono::{DateTime, Duration, Utc};
use fake::{
    Fake,
    faker::{
        address::en::{BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode},
        company::en::CompanyName,
        internet::en::FreeEmail,
        job::en::Title,
        name::en::{FirstName, LastName},
        phone_number::en::PhoneNumber,
    },
};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Username used when the caller does not name one.
pub const DEFAULT_USERNAME: &str = "user";

/// Upper bound for how far back `joinedDate` may go.
pub const JOINED_WINDOW_DAYS: i64 = 730;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub phone: String,
    pub address: Address,
    pub company: String,
    pub job_title: String,
    pub bio: String,
    #[serde(with = "crate::identity::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub joined_date: DateTime<Utc>,
    #[serde(with = "crate::identity::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub last_login: DateTime<Utc>,
}

impl ProfileRecord {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Resolve the username a profile is generated for.
#[must_use]
pub fn username_or_default(username: Option<&str>) -> &str {
    match username {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_USERNAME,
    }
}

/// Build a fresh profile for `username`. Never fails.
///
/// `joined_date` lands somewhere in the [`JOINED_WINDOW_DAYS`] before `now`
/// (at least one second earlier) and `last_login` is `now`.
pub fn synthesize<R: Rng + ?Sized>(username: &str, rng: &mut R, now: DateTime<Utc>) -> ProfileRecord {
    ProfileRecord {
        id: uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid(),
        username: username.to_string(),
        email: FreeEmail().fake_with_rng(rng),
        first_name: FirstName().fake_with_rng(rng),
        last_name: LastName().fake_with_rng(rng),
        avatar: format!(
            "{}/{}",
            catalog::AVATAR_BASE_URL,
            rng.gen_range(1..=99_999_999_u32)
        ),
        phone: PhoneNumber().fake_with_rng(rng),
        address: address(rng),
        company: CompanyName().fake_with_rng(rng),
        job_title: Title().fake_with_rng(rng),
        bio: bio(rng),
        joined_date: joined_before(rng, now),
        last_login: now,
    }
}

fn address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);

    Address {
        street: format!("{number} {street}"),
        city: CityName().fake_with_rng(rng),
        state: StateName().fake_with_rng(rng),
        zip_code: ZipCode().fake_with_rng(rng),
        country: CountryName().fake_with_rng(rng),
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

// "<role>, <trait> <emoji>" and friends
fn bio<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!(
            "{}, {} {}",
            pick(rng, catalog::BIO_ROLES),
            pick(rng, catalog::BIO_TRAITS),
            pick(rng, catalog::EMOJI)
        ),
        1 => format!(
            "{}, {}, {}",
            pick(rng, catalog::BIO_TRAITS),
            pick(rng, catalog::BIO_ROLES),
            pick(rng, catalog::BIO_ROLES)
        ),
        _ => format!(
            "{} {}, {}",
            pick(rng, catalog::BIO_ROLES),
            pick(rng, catalog::EMOJI),
            pick(rng, catalog::BIO_TRAITS)
        ),
    }
}

fn joined_before<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let window_ms = Duration::days(JOINED_WINDOW_DAYS).num_milliseconds();
    now - Duration::milliseconds(rng.gen_range(1_000..=window_ms))
}
