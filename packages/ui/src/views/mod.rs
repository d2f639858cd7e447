mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod notes;
pub use notes::NotesView;

mod note_form;
pub use note_form::NoteForm;
