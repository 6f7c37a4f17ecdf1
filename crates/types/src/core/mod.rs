pub(crate) mod formula;
pub(crate) mod parser;
pub(crate) mod tokenize;
