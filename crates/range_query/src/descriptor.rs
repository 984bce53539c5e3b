//! Wire model of a query task.
//!
//! A task document looks like
//!
//! ```json
//! { "token": "...", "data": [1, 2, 3], "query": [{ "type": "1", "range": [0, 2] }] }
//! ```
//!
//! and is answered with a bare JSON array of numbers, one per query, in order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BatchError;
use crate::query::{Query, QueryKind};
use crate::answer_all;

/// Tag that selects [`QueryKind::RangeSum`]; every other tag is an alternating sum.
pub const RANGE_SUM_TAG: &str = "1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Only the string `"1"` matches; numbers, `null` or a missing tag do not.
    #[serde(rename = "type", default)]
    pub kind: Value,
    pub range: [usize; 2],
}

impl QueryDescriptor {
    pub fn kind(&self) -> QueryKind {
        if self.kind.as_str() == Some(RANGE_SUM_TAG) {
            QueryKind::RangeSum
        } else {
            QueryKind::AlternatingRangeSum
        }
    }
}

impl From<&QueryDescriptor> for Query {
    fn from(desc: &QueryDescriptor) -> Self {
        let [l, r] = desc.range;
        Query::new(desc.kind(), l, r)
    }
}

/// Numbers as they appear on the wire. Integral input stays integral.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numbers {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
}

impl Numbers {
    pub fn len(&self) -> usize {
        match self {
            Numbers::Integers(v) => v.len(),
            Numbers::Floats(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Results of a task. Integer answers are widened to `i128`, so a range over
/// `i64` input never wraps.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answers {
    Integers(Vec<i128>),
    Floats(Vec<f64>),
}

impl Answers {
    pub fn len(&self) -> usize {
        match self {
            Answers::Integers(v) => v.len(),
            Answers::Floats(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub token: Option<String>,
    pub data: Numbers,
    pub query: Vec<QueryDescriptor>,
}

impl TaskPayload {
    pub fn queries(&self) -> Vec<Query> {
        self.query.iter().map(Query::from).collect()
    }

    /// Answers every descriptor against `data`, keeping the numeric flavour of the input.
    pub fn answer(&self) -> Result<Answers, BatchError> {
        let queries = self.queries();
        Ok(match &self.data {
            Numbers::Integers(values) => {
                let wide = values.iter().map(|&v| i128::from(v)).collect::<Vec<_>>();
                Answers::Integers(answer_all(&wide, &queries)?)
            }
            Numbers::Floats(values) => Answers::Floats(answer_all(values, &queries)?),
        })
    }
}
