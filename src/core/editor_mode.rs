//! Interaktionsmodi der Editor-Session.

/// Aktiver Interaktionsmodus.
///
/// Geschlossene Menge; genau ein Modus ist aktiv. Wechsel nur durch explizite
/// Auswahl im Modus-Dropdown, jeder Modus ist aus jedem anderen erreichbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Ansicht: Features per Klick selektieren, keine Geometrie-Änderung
    #[default]
    View,
    /// Neue Punkte zeichnen
    DrawPoint,
    /// Neue LineStrings zeichnen
    DrawLine,
    /// Neue Polygone zeichnen
    DrawPolygon,
    /// Vertices bestehender Features verschieben/ergänzen
    Modify,
}

impl EditorMode {
    /// Alle Modi in Dropdown-Reihenfolge.
    pub const ALL: [EditorMode; 5] = [
        EditorMode::View,
        EditorMode::DrawPoint,
        EditorMode::DrawLine,
        EditorMode::DrawPolygon,
        EditorMode::Modify,
    ];

    /// Anzeigename für das Modus-Dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            EditorMode::View => "View",
            EditorMode::DrawPoint => "Draw Point",
            EditorMode::DrawLine => "Draw Line",
            EditorMode::DrawPolygon => "Draw Polygon",
            EditorMode::Modify => "Modify",
        }
    }

    /// Ob Klick-Selektion in diesem Modus wirksam ist.
    ///
    /// Zeichenmodi unterstützen keine Selektion per Klick; dort ist ein
    /// Feature-Klick per Design ein No-op.
    pub fn supports_selection(&self) -> bool {
        matches!(self, EditorMode::View | EditorMode::Modify)
    }

    /// Ob der Modus neue Geometrie erzeugt.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            EditorMode::DrawPoint | EditorMode::DrawLine | EditorMode::DrawPolygon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::EditorMode;

    #[test]
    fn selection_only_in_view_and_modify() {
        for mode in EditorMode::ALL {
            let expected = matches!(mode, EditorMode::View | EditorMode::Modify);
            assert_eq!(mode.supports_selection(), expected, "Modus {mode:?}");
        }
    }

    #[test]
    fn drawing_modes_are_exactly_the_draw_variants() {
        assert!(!EditorMode::View.is_drawing());
        assert!(!EditorMode::Modify.is_drawing());
        assert!(EditorMode::DrawPoint.is_drawing());
        assert!(EditorMode::DrawLine.is_drawing());
        assert!(EditorMode::DrawPolygon.is_drawing());
    }
}
