use enum_with_values::enum_with_values;

#[enum_with_values(StatusCode)]
#[derive(Default)]
pub enum StatusCodeKind {
    #[default]
    #[value("OK")]
    Ok = 200,
    #[value("No Content")]
    NoContent = 204,
    #[value("Not Found")]
    NotFound = 404
}

fn main() {
    for code in [200i32, 204, 404, 500] {
        let status = StatusCode::from(code);
        println!("{} -> {:?} ({}, {})", code, status, status, i32::from(status.clone()));
    }

    let status = StatusCode::from("Not Found");
    println!("\"Not Found\" -> {:?}", status);
}
