//! English translation table.

/// Fixed English strings keyed by semantic key.
pub(super) const TABLE: &[(&str, &str)] = &[
    ("description", "Generate ID card numbers for German ID cards."),
    ("header", "ID Card Number Generator"),
    ("authority_id", "Authority ID"),
    ("assigned_number", "Number"),
    ("birth_date", "Birth Date"),
    ("expiry_date", "Expiry Date"),
    ("issuing_date", "Issuing Date"),
    ("random", "New"),
    ("reset", "Reset"),
    ("id_card_number", "ID Card Number"),
    ("privacy", "Privacy"),
    (
        "privacy_notice",
        "PersoGenius runs locally in your browser, meaning the server does not store or process \
         any personal data. User inputs remain on the device and are not transmitted to the \
         server.",
    ),
];
