use std::io::{self, Read};
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};
use rug::Integer;

use fieldsqrt::{inverse, legendre, sqrt_mod_prime, CurveParams, Error};

const USAGE: &str = "usage: sqrt <n> <p> | legendre <a> <p> | inverse <a> <n> | decompress <curve> <hex> \
(integers in decimal or 0x hex, optionally signed; moduli must be at least 2)";

// Accepts an optional sign followed by decimal digits or 0x/0X-prefixed hex digits.
fn parse_int(token: &str) -> Result<Integer, Error> {
    let invalid = || Error::InvalidInteger(token.to_string());

    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let (radix, digits) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, body),
    };
    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    let value = Integer::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(if negative { -value } else { value })
}

fn parse_modulus(token: &str) -> Result<Integer, Error> {
    let modulus = parse_int(token)?;
    if modulus < 2 {
        return Err(Error::InvalidModulus(modulus.to_string()));
    }
    Ok(modulus)
}

fn run(tokens: &[&str]) -> Result<Option<String>, Error> {
    let output = match *tokens {
        ["sqrt", n, p] => match sqrt_mod_prime(&parse_int(n)?, &parse_modulus(p)?) {
            Ok(r) => r.to_string(),
            Err(Error::NoSquareRoot) => format!("{} has no square root modulo {}", n, p),
            Err(e) => return Err(e),
        },
        ["legendre", a, p] => legendre(&parse_int(a)?, &parse_modulus(p)?).to_string(),
        ["inverse", a, n] => inverse(&parse_int(a)?, &parse_modulus(n)?).to_string(),
        ["decompress", name, encoded] => {
            let curve =
                CurveParams::by_name(name).ok_or_else(|| Error::UnknownCurve(name.to_string()))?;
            let (x, y) = curve.decompress(&hex::decode(encoded)?)?;
            info!("decompressed point on {}", curve.name);
            format!("x = 0x{}\ny = 0x{}", x.to_string_radix(16), y.to_string_radix(16))
        }
        _ => return Ok(None),
    };
    Ok(Some(output))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut buffer = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buffer) {
        error!("failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }
    let tokens: Vec<&str> = buffer.split_whitespace().collect();

    match run(&tokens) {
        Ok(Some(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            error!("{}", USAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
