use uuid::Uuid;

/// A field-level problem found before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftError {
    pub field: &'static str,
    pub message: String,
}

impl DraftError {
    pub fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Entity types manageable from an admin panel.
pub trait AdminEntity: Clone {
    type Draft: Clone + Default;

    fn id(&self) -> Uuid;
}

/// The single shared form is either creating a new entity or editing an
/// existing one; the mode decides which endpoint a save targets.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<D> {
    Create { draft: D },
    Edit { id: Uuid, draft: D },
}

/// The list-management pattern shared by the flights, airlines and accounts
/// screens: a cached collection, a single create/edit form, and a
/// confirmation-gated delete.
///
/// The cache only moves on acknowledgment: created entities are prepended
/// after the server returns them, updates replace the matching entry,
/// deletions remove it. Load failures surface inline and are retried
/// manually.
#[derive(Debug)]
pub struct CrudPanel<E: AdminEntity> {
    items: Vec<E>,
    mode: FormMode<E::Draft>,
    load_error: Option<String>,
    pending_delete: Option<Uuid>,
}

impl<E: AdminEntity> Default for CrudPanel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AdminEntity> CrudPanel<E> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            mode: FormMode::Create { draft: E::Draft::default() },
            load_error: None,
            pending_delete: None,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn mode(&self) -> &FormMode<E::Draft> {
        &self.mode
    }

    pub fn draft_mut(&mut self) -> &mut E::Draft {
        match &mut self.mode {
            FormMode::Create { draft } | FormMode::Edit { draft, .. } => draft,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Adopt a freshly listed collection.
    pub fn set_loaded(&mut self, items: Vec<E>) {
        self.items = items;
        self.load_error = None;
    }

    /// Record a list-load failure for inline display. The user retries by
    /// triggering another load; there is no automatic backoff.
    pub fn set_load_error(&mut self, message: String) {
        tracing::warn!(%message, "Admin list load failed");
        self.load_error = Some(message);
    }

    /// Switch the shared form to editing `id`. Any in-progress create draft
    /// for this form is discarded; edit mode is exclusive.
    pub fn enter_edit(&mut self, id: Uuid, draft: E::Draft) {
        self.mode = FormMode::Edit { id, draft };
    }

    /// Back to a blank create form.
    pub fn reset_form(&mut self) {
        self.mode = FormMode::Create { draft: E::Draft::default() };
    }

    /// The server acknowledged a create: show the returned entity first.
    pub fn apply_created(&mut self, entity: E) {
        self.items.insert(0, entity);
        self.reset_form();
    }

    /// The server acknowledged an update: swap in the returned entity.
    pub fn apply_updated(&mut self, entity: E) {
        if let Some(existing) = self.items.iter_mut().find(|e| e.id() == entity.id()) {
            *existing = entity;
        }
        self.reset_form();
    }

    /// Arm the destructive-action gate. Nothing is deleted until
    /// `confirm_delete` is called.
    pub fn request_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The user confirmed: hand back the id whose delete request should now
    /// be issued.
    pub fn confirm_delete(&mut self) -> Option<Uuid> {
        self.pending_delete.take()
    }

    /// The server acknowledged the delete.
    pub fn apply_deleted(&mut self, id: Uuid) {
        self.items.retain(|e| e.id() != id);
    }
}
