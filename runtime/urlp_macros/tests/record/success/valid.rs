use urlp::Record;

#[derive(Record)]
pub struct Empty {}

#[derive(Record)]
pub struct Plain {
    pub a: u64,
    pub b: String,
    pub c: Vec<i8>,
}

#[derive(Record)]
pub struct Annotated {
    #[urlp("g,optional")]
    pub a: u64,
    #[urlp("!")]
    pub b: bool,
    #[urlp("notinlined")]
    pub nested: Plain,
}

#[derive(Record)]
pub struct MultipleTags {
    #[urlp("g", form = "x,optional")]
    pub a: f32,
    #[urlp(form = "!")]
    #[urlp("h")]
    pub b: usize,
}

#[derive(Record)]
pub struct RawIdentifiers {
    pub r#type: String,
    #[urlp(r#ref = "optional")]
    pub r#match: u8,
}

#[derive(Record)]
#[allow(non_snake_case)]
pub struct UpperCase {
    pub A: i32,
    pub B: u32,
}

fn main() {}
