// Pieces the faker crate has no generator for.

pub const BIO_ROLES: &[&str] = &[
    "developer", "musician", "traveler", "photographer", "gardener", "runner", "writer",
    "designer", "librarian", "cyclist", "gamer", "chef", "reader", "hiker",
];

pub const BIO_TRAITS: &[&str] = &[
    "curious", "coffee lover", "open source fan", "dog person", "cat person", "night owl",
    "early riser", "film buff", "board game geek", "lifelong learner",
];

pub const EMOJI: &[&str] = &["🚀", "🌱", "🎧", "📚", "☕", "🏔️", "🎨", "🧩"];

pub const AVATAR_BASE_URL: &str = "https://avatars.githubusercontent.com/u";
