use urlp::Record;

#[derive(Record)]
pub struct Query {
    #[urlp("a")]
    #[urlp("b")]
    pub a: u32,
}

fn main() {}
