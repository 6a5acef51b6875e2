use archviz_core::common::Region;
use archviz_core::config::MemoryLayout;
use archviz_core::soc::Memory;
use pretty_assertions::assert_eq;

fn accessed(memory: &Memory, region: Region) -> Vec<u32> {
    memory.accessed(region).map(|cell| cell.address).collect()
}

#[test]
fn test_missing_cells_read_as_zero() {
    let memory = Memory::new(MemoryLayout::Split);
    assert_eq!(memory.read(Region::Data, 12_345), "0");
    assert_eq!(memory.read_value(Region::Data, 12_345), 0);
    assert!(memory.cell(Region::Data, 12_345).is_none());
}

#[test]
fn test_non_numeric_content_reads_as_zero_value() {
    let mut memory = Memory::new(MemoryLayout::Split);
    memory.poke(5, "hello".to_owned());
    assert_eq!(memory.read(Region::Data, 5), "hello");
    assert_eq!(memory.read_value(Region::Data, 5), 0);
}

#[test]
fn test_values_read_their_leading_integer() {
    let mut memory = Memory::new(MemoryLayout::Split);
    memory.poke(5, "42abc".to_owned());
    memory.poke(6, "42.5".to_owned());
    memory.poke(7, " -8 ".to_owned());
    assert_eq!(memory.read_value(Region::Data, 5), 42);
    assert_eq!(memory.read_value(Region::Data, 6), 42);
    assert_eq!(memory.read_value(Region::Data, 7), -8);
}

#[test]
fn test_split_banks_are_independent() {
    let mut memory = Memory::new(MemoryLayout::Split);
    let address = memory.push_instruction("LOAD R1, 0");
    memory.poke(0, "99".to_owned());
    assert_eq!(address, 0);
    assert_eq!(memory.read(Region::Instruction, 0), "LOAD R1, 0");
    assert_eq!(memory.read(Region::Data, 0), "99");
    assert_eq!(memory.instruction_count(), 1);
}

#[test]
fn test_unified_instruction_replaces_data_at_same_address() {
    let mut memory = Memory::new(MemoryLayout::Unified);
    memory.poke(0, "7".to_owned());
    memory.poke(1, "8".to_owned());
    let address = memory.push_instruction("ADD R1, R1, R1");
    assert_eq!(address, 0);
    assert_eq!(memory.cell(Region::Data, 0).map(|c| c.region), Some(Region::Instruction));
    assert_eq!(memory.cells(Region::Data).count(), 1);
}

#[test]
fn test_unified_write_keeps_the_instruction_tag() {
    let mut memory = Memory::new(MemoryLayout::Unified);
    let _ = memory.push_instruction("LOAD R1, 100");
    memory.write(Region::Data, 0, "42".to_owned());
    let cell = memory.instruction_at(0).unwrap();
    assert_eq!(cell.content, "42");
    assert_eq!(cell.region, Region::Instruction);
}

#[test]
fn test_mark_accessed_keeps_a_single_highlight() {
    let mut memory = Memory::new(MemoryLayout::Split);
    for address in [100, 200, 300] {
        memory.poke(address, "1".to_owned());
    }
    assert!(memory.mark_accessed(Region::Data, 100));
    assert!(memory.mark_accessed(Region::Data, 200));
    assert_eq!(accessed(&memory, Region::Data), vec![200]);
}

#[test]
fn test_highlight_scope_follows_the_layout() {
    let mut split = Memory::new(MemoryLayout::Split);
    let _ = split.push_instruction("LOAD R1, 100");
    split.poke(100, "1".to_owned());
    let _ = split.mark_accessed(Region::Instruction, 0);
    let _ = split.mark_accessed(Region::Data, 100);
    assert_eq!(accessed(&split, Region::Instruction), vec![0]);
    assert_eq!(accessed(&split, Region::Data), vec![100]);

    let mut unified = Memory::new(MemoryLayout::Unified);
    let _ = unified.push_instruction("LOAD R1, 100");
    unified.poke(100, "1".to_owned());
    let _ = unified.mark_accessed(Region::Instruction, 0);
    let _ = unified.mark_accessed(Region::Data, 100);
    assert_eq!(accessed(&unified, Region::Data), vec![100]);
}

#[test]
fn test_marking_a_missing_cell_clears_the_bank() {
    let mut memory = Memory::new(MemoryLayout::Split);
    memory.poke(1, "1".to_owned());
    let _ = memory.mark_accessed(Region::Data, 1);
    assert!(!memory.mark_accessed(Region::Data, 2));
    assert!(accessed(&memory, Region::Data).is_empty());
}

#[test]
fn test_write_flags_without_clearing_others() {
    let mut memory = Memory::new(MemoryLayout::Split);
    memory.poke(1, "1".to_owned());
    let _ = memory.mark_accessed(Region::Data, 1);
    memory.write(Region::Data, 2, "5".to_owned());
    assert_eq!(accessed(&memory, Region::Data), vec![1, 2]);
}

#[test]
fn test_clear_instructions_keeps_data() {
    for layout in [MemoryLayout::Unified, MemoryLayout::Split] {
        let mut memory = Memory::new(layout);
        let _ = memory.push_instruction("LOAD R1, 100");
        let _ = memory.push_instruction("LOAD R2, 200");
        memory.poke(100, "42".to_owned());
        memory.clear_instructions();
        assert_eq!(memory.instruction_count(), 0);
        assert!(memory.instruction_at(0).is_none());
        assert_eq!(memory.read(Region::Data, 100), "42");
    }
}
