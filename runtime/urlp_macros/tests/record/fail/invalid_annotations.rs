use urlp::Record;

#[derive(Record)]
pub struct Query {
    #[urlp("a,b")]
    pub a: u32,
    #[urlp(form = "g, optional")]
    pub b: u32,
}

fn main() {}
