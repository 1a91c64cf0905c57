use crate::directory::UserDirectory;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory: UserDirectory,
}
