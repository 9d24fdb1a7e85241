pub mod modules{
    pub mod scalar;
    pub mod polynomial;
    pub mod error;
}
