//! German translation table.

/// Fixed German strings keyed by semantic key.
pub(super) const TABLE: &[(&str, &str)] = &[
    ("description", "Generiere Ausweisnummmern für deutsche Personalausweise."),
    ("header", "Personalausweisnummer Generator"),
    ("authority_id", "Behördenkennzahl"),
    ("assigned_number", "Nummer"),
    ("birth_date", "Geburtsdatum"),
    ("expiry_date", "Ablaufdatum"),
    ("issuing_date", "Ausstellungsdatum"),
    ("random", "Neu"),
    ("reset", "Zurücksetzen"),
    ("id_card_number", "Ausweisnummer"),
    ("privacy", "Datenschutz"),
    (
        "privacy_notice",
        "PersoGenius wird lokal in Ihrem Browser ausgeführt, was bedeutet, dass der Server keine \
         personenbezogenen Daten speichert oder verarbeitet. Benutzereingaben bleiben auf dem \
         Gerät und werden nicht an den Server übertragen.",
    ),
];
