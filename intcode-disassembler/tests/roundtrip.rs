//! Disassembler output fed back through the assembler

use intcode_assembler::assemble;
use intcode_disassembler::{disassemble, disassemble_at, DisassemblerError};
use intcode_spec::{Instruction, Opcode, ParamMode, Program, Word};
use proptest::prelude::*;

/// Strip the address column so the listing is valid assembler input
fn listing_to_source(listing: &str) -> String {
    listing
        .lines()
        .map(|line| match line.split_once(":  ") {
            Some((_, text)) => text,
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn reassemble(program: &Program) -> Program {
    assemble(&listing_to_source(&disassemble(program))).unwrap()
}

#[test]
fn test_roundtrip_known_program() {
    let source = r#"
            in n
    loop:   out n
            add n, #-1, n
            jt n, #loop
            arb #3
            mul @-1, #2, @0
            hlt
    n:      .data 0
    "#;
    let program = assemble(source).unwrap();
    assert_eq!(reassemble(&program), program);
}

#[test]
fn test_listing_format() {
    let program = Program::new(vec![1101, 2, 3, 7, 99, 0]);
    let listing = disassemble(&program);
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines[0], "; Intcode disassembly");
    assert_eq!(lines[1], "; Size: 6 words");
    assert_eq!(lines[3], "     0:  add #2, #3, 7");
    assert_eq!(lines[4], "     4:  hlt");
    assert_eq!(lines[5], "     5:  .data 0");
}

#[test]
fn test_data_survives_roundtrip() {
    let program = Program::new(vec![99, -5, 12345, 0, 7]);
    assert_eq!(reassemble(&program), program);
}

#[test]
fn test_truncated_tail() {
    let words = [99, 1, 2];
    assert!(matches!(
        disassemble_at(&words, 1),
        Err(DisassemblerError::Truncated { address: 1 })
    ));
    let listing = disassemble(&Program::new(words.to_vec()));
    assert!(listing.contains("     1:  .data 1"));
    assert!(listing.contains("     2:  .data 2"));
}

fn arb_instruction() -> impl Strategy<Value = (Instruction, Vec<Word>)> {
    let modes = prop::sample::select(vec![
        ParamMode::Position,
        ParamMode::Immediate,
        ParamMode::Relative,
    ]);
    (
        prop::sample::select(Opcode::ALL.to_vec()),
        [modes.clone(), modes.clone(), modes],
        prop::collection::vec(-10_000i64..10_000, 3),
    )
        .prop_map(|(opcode, modes, operands)| {
            let instr = Instruction::with_modes(opcode, modes);
            (instr, operands[..opcode.param_count()].to_vec())
        })
        .prop_filter("assembler rejects immediate writes", |(instr, _)| {
            !instr.has_immediate_write()
        })
}

proptest! {
    #[test]
    fn test_instruction_sequences_roundtrip(
        instructions in prop::collection::vec(arb_instruction(), 1..20)
    ) {
        let mut code = Vec::new();
        for (instr, operands) in instructions {
            code.push(instr.encode());
            code.extend(operands);
        }
        let program = Program::new(code);
        prop_assert_eq!(reassemble(&program), program);
    }
}
