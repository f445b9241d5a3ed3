pub(crate) mod readline;
