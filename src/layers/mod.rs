pub mod composer;
pub mod descriptor;
