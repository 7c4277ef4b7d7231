//! Per-command grammars.

use aupal_bytecode::Opcode;
use aupal_bytecode::value::is_wire_string;

use super::LineParser;
use super::assignment::{parse_assignment, unquote};
use super::error::{Arity, ParseErrorKind};

type Result<T> = std::result::Result<T, ParseErrorKind>;

impl LineParser {
    /// Parse a top-level command line. The first character selects the
    /// command; the rest of the line holds its arguments. Blank lines never
    /// get here.
    pub(super) fn command(&mut self, line: &str) -> Result<()> {
        let mut chars = line.chars();
        let letter = chars.next().expect("command line is not blank");
        let opcode = Opcode::from_char(letter).ok_or(ParseErrorKind::UnknownCommand(letter))?;
        let args = chars.as_str().trim_start();

        self.emission.start(self.line);
        match opcode {
            Opcode::AddInstance => self.add_instance(args),
            Opcode::RemoveInstance => self.remove_instance(args),
            Opcode::SetValues | Opcode::UpdateValues => self.set_or_update_values(opcode, args),
            Opcode::UpdateValue => self.update_value(args),
            Opcode::DeleteValue => self.delete_value(args),
            Opcode::Connect => self.connect(args),
            Opcode::Disconnect => self.disconnect(args),
        }
    }

    fn add_instance(&mut self, args: &str) -> Result<()> {
        let opcode = Opcode::AddInstance;
        match split_args(args)?.as_slice() {
            [] => {
                self.emission.push_byte(opcode.to_byte());
                self.emission.push_bytes(&[0, 0, 0]);
                self.emission.commit("I (clear all)");
            }
            [id, name] => {
                self.emission.push_byte(opcode.to_byte());
                self.emission.push_str(id);
                self.emission.push_str(name);
                self.emission.commit(format!("I (instance ID \"{id}\", name \"{name}\")"));
            }
            found => return Err(arity(opcode, Arity::ZeroOrTwo, found.len())),
        }
        Ok(())
    }

    fn remove_instance(&mut self, args: &str) -> Result<()> {
        let opcode = Opcode::RemoveInstance;
        let [name] = exact_args::<1>(opcode, args)?;
        self.emission.push_byte(opcode.to_byte());
        self.emission.push_str(name);
        self.emission.commit(format!("i (instance \"{name}\" removed)"));
        Ok(())
    }

    fn set_or_update_values(&mut self, opcode: Opcode, args: &str) -> Result<()> {
        let [element] = exact_args::<1>(opcode, args)?;
        self.emission.push_byte(opcode.to_byte());
        self.emission.push_str(element);
        self.open_block(opcode, element);
        Ok(())
    }

    fn update_value(&mut self, args: &str) -> Result<()> {
        let opcode = Opcode::UpdateValue;
        let (element, rest) = match args.split_once(char::is_whitespace) {
            Some((element, rest)) => (element, rest.trim_start()),
            None => (args, ""),
        };
        if rest.is_empty() {
            let found = usize::from(!element.is_empty());
            return Err(arity(opcode, Arity::Exactly(2), found));
        }
        check_string(element)?;

        let assignment = parse_assignment(rest)?;
        self.emission.push_byte(opcode.to_byte());
        self.emission.push_str(element);
        assignment.emit(&mut self.emission);
        self.emission.commit(format!(
            "u (update control \"{}\" for element \"{element}\")",
            assignment.name
        ));
        Ok(())
    }

    fn delete_value(&mut self, args: &str) -> Result<()> {
        let opcode = Opcode::DeleteValue;
        let [element, control] = exact_args::<2>(opcode, args)?;
        self.emission.push_byte(opcode.to_byte());
        self.emission.push_str(element);
        self.emission.push_str(control);
        self.emission.commit(format!("d (delete value \"{control}\" for element \"{element}\")"));
        Ok(())
    }

    fn connect(&mut self, args: &str) -> Result<()> {
        let opcode = Opcode::Connect;
        let [sink, source] = exact_args::<2>(opcode, args)?;
        self.emission.push_byte(opcode.to_byte());
        self.emission.push_str(sink);
        self.emission.push_str(source);
        self.emission.commit(format!(
            "C (make audio connection from \"{sink}\" to \"{source}\")"
        ));
        Ok(())
    }

    fn disconnect(&mut self, args: &str) -> Result<()> {
        let opcode = Opcode::Disconnect;
        let args = split_args(args)?;
        if args.len() > 2 {
            return Err(arity(opcode, Arity::AtMost(2), args.len()));
        }
        let endpoint = |i: usize| args.get(i).copied().map_or("", |a| unquote(a).unwrap_or(a));
        let (from, to) = (endpoint(0), endpoint(1));

        let details = match (from.is_empty(), to.is_empty()) {
            (true, true) => "all audio connections".to_string(),
            (false, true) => format!("audio connections from \"{from}\""),
            (true, false) => format!("audio connections to \"{to}\""),
            (false, false) => format!("audio connections from \"{from}\" to \"{to}\""),
        };

        self.emission.push_byte(opcode.to_byte());
        self.emission.push_str(from);
        self.emission.push_str(to);
        self.emission.commit(format!("c (remove {details})"));
        Ok(())
    }
}

/// Split on whitespace runs, rejecting operands that cannot travel as wire
/// strings.
fn split_args(args: &str) -> Result<Vec<&str>> {
    let args: Vec<&str> = args.split_whitespace().collect();
    for arg in &args {
        check_string(arg)?;
    }
    Ok(args)
}

fn exact_args<const N: usize>(opcode: Opcode, args: &str) -> Result<[&str; N]> {
    let args = split_args(args)?;
    let found = args.len();
    args.try_into().map_err(|_| arity(opcode, Arity::Exactly(N), found))
}

fn check_string(s: &str) -> Result<()> {
    if is_wire_string(s) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidString(s.to_string()))
    }
}

fn arity(command: Opcode, expected: Arity, found: usize) -> ParseErrorKind {
    ParseErrorKind::ArgumentCount {
        command,
        expected,
        found,
    }
}
