//! Circuit name to circuit-map image lookup.
//!
//! One table serves every view. Matching is case-insensitive: an exact match
//! on a key wins, otherwise the first key (in declaration order) contained in
//! the circuit name is used. Longer, more specific keys are declared before
//! shorter ones they could shadow.

const TRACK_IMAGES: &[(&str, &str)] = &[
    ("Circuit of the Americas", "USA_Circuit"),
    ("Austin", "USA_Circuit"),
    ("Yas Marina", "Abu_Dhabi_Circuit"),
    ("Marina Bay", "Singapore_Circuit"),
    ("Singapore", "Singapore_Circuit"),
    ("Monte Carlo", "Monaco_Circuit"),
    ("Monaco", "Monaco_Circuit"),
    ("Monza", "Monza_Circuit"),
    ("Imola", "Emilia_Romagna_Circuit"),
    ("Silverstone", "Great_Britain_Circuit"),
    ("Spa-Francorchamps", "Spa_Circuit"),
    ("Suzuka", "Suzuka_Circuit"),
    ("Interlagos", "Brazil_Circuit"),
    ("Catalunya", "Spain_Circuit"),
    ("Barcelona", "Spain_Circuit"),
    ("Red Bull Ring", "Austria_Circuit"),
    ("Spielberg", "Austria_Circuit"),
    ("Zandvoort", "Netherlands_Circuit"),
    ("Hungaroring", "Hungary_Circuit"),
    ("Miami", "Miami_Circuit"),
    ("Jeddah", "Saudi_Arabia_Circuit"),
    ("Albert Park", "Australia_Circuit"),
    ("Melbourne", "Australia_Circuit"),
    ("Sakhir", "Bahrain_Circuit"),
    ("Bahrain", "Bahrain_Circuit"),
    ("Shanghai", "China_Circuit"),
    ("Baku", "Baku_Circuit"),
    ("Azerbaijan", "Baku_Circuit"),
    ("Montreal", "Canada_Circuit"),
    ("Lusail", "Qatar_Circuit"),
    ("Las Vegas", "Las_Vegas_Circuit"),
    ("Mexico City", "Mexico_Circuit"),
];

/// Canonical image identifier for a circuit name, if known.
pub fn track_image_id(circuit_name: &str) -> Option<&'static str> {
    let needle = circuit_name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    TRACK_IMAGES
        .iter()
        .find(|(key, _)| key.to_lowercase() == needle)
        .or_else(|| {
            TRACK_IMAGES
                .iter()
                .find(|(key, _)| needle.contains(&key.to_lowercase()))
        })
        .map(|(_, id)| *id)
}

/// Circuit map URL, or an empty string when no image is available.
pub fn track_image_url(base_url: &str, circuit_name: &str) -> String {
    match track_image_id(circuit_name) {
        Some(id) => format!("{}/{}.png", base_url, id),
        None => String::new(),
    }
}
