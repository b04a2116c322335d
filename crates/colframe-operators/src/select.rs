//! Column projection.

use colframe_core::prelude::{Result, Table};

use crate::traits::Operator;

#[derive(Debug, Clone)]
pub struct Select {
    pub columns: Vec<String>,
}

impl Select {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl Operator for Select {
    fn name(&self) -> &'static str {
        "select"
    }

    fn eval(&self, input: &Table) -> Result<Table> {
        input.select(&self.columns)
    }
}
