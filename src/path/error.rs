use derive_more::{Display, Error, From};

use crate::error::{NoFileComponentError, WildPathError};

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum FormError {
    Wild(WildPathError),
    NoFileComponent(NoFileComponentError),
}
