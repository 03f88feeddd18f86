use std::env::{self, VarError};

use anyhow::bail;

// (build environment, rustc environment)
const FORWARDED: [(&str, &str); 2] = [
    ("VERS_VERSION", "VERS_BUILD_VERSION"),
    ("VERS_GITCOMMIT", "VERS_BUILD_GITCOMMIT"),
];

fn main() {
    for (from, to) in FORWARDED {
        println!("cargo:rerun-if-env-changed={from}");

        if let Err(err) = forward(from, to) {
            println!("cargo:warning=vers: {err}");
        }
    }
}

// Unset stays unset so the crate falls back to "".
fn forward(from: &str, to: &str) -> anyhow::Result<()> {
    let value = match env::var(from) {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(()),
        Err(VarError::NotUnicode(_)) => bail!("{from} is not valid unicode, ignoring it"),
    };

    if value.contains('\n') || value.contains('\r') {
        bail!("{from} contains a line break, ignoring it");
    }

    println!("cargo:rustc-env={to}={value}");
    Ok(())
}
