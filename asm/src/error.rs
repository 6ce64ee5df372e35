use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown comp mnemonic: `{0}`")]
    UnknownComp(String),

    #[error("Unknown dest mnemonic: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump mnemonic: `{0}`")]
    UnknownJump(String),

    #[error("Address literal out of range: `{0}`")]
    AddressRange(String),

    #[error("Input file must end in `.asm`: {0}")]
    InputName(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
