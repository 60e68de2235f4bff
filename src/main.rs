#[rocket::launch]
fn rocket() -> rocket::Rocket<rocket::Build> {
    nc_news::rocket()
}
