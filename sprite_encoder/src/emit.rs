/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Display};

const BYTES_PER_LINE: usize = 16;

/// Formats bytes as a C `uint8_t` array definition, 16 values per line.
#[derive(Debug, Clone, Copy)]
pub struct ArrayLiteral<'a> {
    pub symbol: &'a str,
    pub bytes: &'a [u8],
}

impl Display for ArrayLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "uint8_t {}[] =\n{{", self.symbol)?;
        for (n, byte) in self.bytes.iter().enumerate() {
            if n % BYTES_PER_LINE == 0 {
                f.write_str("    ")?;
            }
            write!(f, "{byte:3},")?;
            f.write_str(if n % BYTES_PER_LINE != BYTES_PER_LINE - 1 {
                " "
            } else {
                "\n"
            })?;
        }
        if self.bytes.len() % BYTES_PER_LINE != 0 {
            f.write_str("\n")?;
        }
        f.write_str("};\n")
    }
}
