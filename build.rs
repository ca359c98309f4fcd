//! Retrieves information about the version of the library from Git and the
//! build environment. It is exposed through the `build` module generated by
//! shadow-rs.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
