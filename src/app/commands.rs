//! Statischer Katalog der benannten Kommandos.
//!
//! Fixe, geschlossene Zuordnung Anzeigename → Effekt, bei Initialisierung
//! gebunden. Kein zur Laufzeit erweiterbares Registry: die Kommandomenge ist
//! klein und Teil der Konfiguration.

/// Anzeigename des eingebauten Clear-All-Kommandos.
pub const CLEAR_ALL: &str = "Clear All";

/// Effekt eines benannten Kommandos (parameterlos, mutiert die Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Feature-Collection und Selektion auf leer zurücksetzen
    ClearAll,
}

/// Geordneter Katalog Anzeigename → Effekt.
///
/// Die Reihenfolge der Einträge bestimmt die Button-Reihenfolge im
/// Aktions-Panel.
pub struct CommandCatalog {
    entries: Vec<(&'static str, CommandEffect)>,
}

impl CommandCatalog {
    /// Erstellt den eingebauten Katalog.
    pub fn builtin() -> Self {
        Self {
            entries: vec![(CLEAR_ALL, CommandEffect::ClearAll)],
        }
    }

    /// Schlägt ein Kommando per Anzeigename nach.
    ///
    /// `None` bedeutet einen Verdrahtungsfehler (der Katalog ist statisch);
    /// der Controller macht daraus einen harten Fehler.
    pub fn lookup(&self, name: &str) -> Option<CommandEffect> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, effect)| *effect)
    }

    /// Anzeigenamen in Katalog-Reihenfolge (für das Aktions-Panel).
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}
