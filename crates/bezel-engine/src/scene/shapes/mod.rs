pub(crate) mod fill;
pub(crate) mod stroke;
pub(crate) mod text;
