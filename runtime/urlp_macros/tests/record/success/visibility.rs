use std::collections::HashMap;
use std::rc::Rc;

use urlp::Record;

mod inner {
    #[derive(urlp::Record)]
    pub struct Restricted {
        pub(crate) a: u32,
        pub(super) b: u32,
        pub(in crate::inner) c: u32,
        d: u32,
    }
}

// Private fields are never decoded, their type doesn't matter.
#[derive(Record)]
pub struct PrivateFields {
    pub a: u32,
    lookup: HashMap<String, Rc<str>>,
    _marker: (),
}

// A field type that isn't decodable is a runtime error, not a compile-time one.
#[derive(Record)]
pub struct UnsupportedFields {
    pub a: char,
    pub b: Option<u32>,
    pub c: Box<str>,
}

fn main() {}
