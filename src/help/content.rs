/// Key bindings shown in the help popup
///
/// An entry with an empty key renders as a section header.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "TASTEN"),
    ("F1 / ?", "Diese Hilfe ein-/ausblenden"),
    ("n", "Benachrichtigungen oeffnen/schliessen"),
    ("r", "Liste aktualisieren (bei offenem Tray)"),
    ("a", "Alle als gelesen markieren (bei offenem Tray)"),
    ("Esc", "Tray oder Hilfe schliessen"),
    ("q / Ctrl+C", "Beenden"),
];

pub const HELP_FOOTER: &str = "Druecke ? oder Esc zum Schliessen";
