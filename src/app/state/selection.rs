use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
///
/// Heute selektiert die UI höchstens ein Feature; die Menge bleibt trotzdem
/// eine Menge, damit Mehrfachselektion den Vertrag nicht ändert.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Indexe der aktuell selektierten Features, in Selektionsreihenfolge
    /// (Arc für O(1)-Clone in RenderScene)
    pub selected_feature_indexes: Arc<IndexSet<usize>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_feature_indexes: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf die IndexSet zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode, damit der
    /// Arc-Klon in `render_scene::build()` O(1) bleibt.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<usize> {
        Arc::make_mut(&mut self.selected_feature_indexes)
    }

    /// Anzahl selektierter Features.
    pub fn len(&self) -> usize {
        self.selected_feature_indexes.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_feature_indexes.is_empty()
    }
}
