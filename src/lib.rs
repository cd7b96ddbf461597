pub mod modules{
    pub mod errors;
    pub mod radix;
    pub mod polynomial;
    pub mod input;
    pub mod session;
}
