/// Syntactic kind of a command, decided by its first character alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `@Xxx` where Xxx is a symbol or a decimal literal.
    Address,
    /// `dest=comp;jump` with dest and jump optional.
    Comp,
    /// `(Xxx)`: binds Xxx to the next instruction's address, emits nothing.
    Label,
}

/// View over one normalized command.
#[derive(Debug, Clone, Copy)]
pub struct Command<'a>(&'a str);

impl<'a> Command<'a> {
    pub fn new(command: &'a str) -> Self {
        Command(command)
    }

    pub fn kind(&self) -> Kind {
        match self.0.chars().next() {
            Some('@') => Kind::Address,
            Some('(') => Kind::Label,
            _ => Kind::Comp,
        }
    }

    /// The Xxx of `@Xxx` or `(Xxx)`. Only meaningful for address and label
    /// commands.
    pub fn symbol(&self) -> &'a str {
        match self.kind() {
            Kind::Address => &self.0[1..],
            _ => &self.0[1..self.0.len() - 1],
        }
    }

    /// Text before `=`, or `None` when there is no `=`.
    pub fn dest(&self) -> Option<&'a str> {
        self.0.split_once('=').map(|(dest, _)| dest)
    }

    /// The comp expression. Total over all four `=`/`;` presence cases.
    pub fn comp(&self) -> &'a str {
        let tail = match self.0.split_once('=') {
            Some((_, tail)) => tail,
            None => self.0,
        };
        match tail.split_once(';') {
            Some((comp, _)) => comp,
            None => tail,
        }
    }

    /// Text after `;`, or `None` when there is no `;`.
    pub fn jump(&self) -> Option<&'a str> {
        self.0.split_once(';').map(|(_, jump)| jump)
    }
}
