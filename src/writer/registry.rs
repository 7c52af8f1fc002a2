//! Emit `Registry.sol`, the forge helper library that etches the suave
//! precompile wrappers into a local test chain.

use crate::model::RenderContext;
use std::fmt::{self, Write};

/// Address of the forge cheatcode contract.
const CHEATCODE_ADDRESS: &str = "0x7109709ECfa91a80626fF3989D68f67F5b1DD12D";

pub fn emit(ctx: &RenderContext<'_>, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "// SPDX-License-Identifier: UNLICENSED")?;
    writeln!(out, "// DO NOT edit this file. Code generated by forge-gen.")?;
    writeln!(out, "pragma solidity ^0.8.8;\n")?;
    writeln!(out, "import \"../suavelib/Suave.sol\";\n")?;

    writeln!(out, "interface registryVM {{")?;
    writeln!(out, "    function etch(address, bytes calldata) external;")?;
    writeln!(out, "}}\n")?;

    writeln!(out, "library Registry {{")?;
    writeln!(out, "    registryVM constant vm = registryVM({CHEATCODE_ADDRESS});\n")?;

    // ---------------------------------------------------------------
    // 1. enableLib: etch the connector at `addr`, the confidential
    //    inputs wrapper at its fixed precompile address
    // ---------------------------------------------------------------
    writeln!(out, "    function enableLib(address addr) public {{")?;
    writeln!(out, "        // code for Wrapper")?;
    writeln!(out, "        bytes memory code =")?;
    writeln!(out, "            hex\"{}\";", ctx.bytecodes.connector)?;
    writeln!(out, "        vm.etch(addr, code);\n")?;
    writeln!(out, "        // enable is confidential wrapper")?;
    writeln!(out, "        bytes memory confidentialCode =")?;
    writeln!(out, "            hex\"{}\";", ctx.bytecodes.confidential)?;
    writeln!(out, "        vm.etch(Suave.CONFIDENTIAL_INPUTS, confidentialCode);")?;
    writeln!(out, "    }}\n")?;

    // ---------------------------------------------------------------
    // 2. enable: one enableLib call per precompile
    // ---------------------------------------------------------------
    writeln!(out, "    function enable() public {{")?;
    for name in ctx.precompiles {
        writeln!(out, "        enableLib(Suave.{name});")?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(())
}

pub fn render(ctx: &RenderContext<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    emit(ctx, &mut out)?;
    Ok(out)
}
