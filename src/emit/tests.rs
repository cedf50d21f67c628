#[cfg(test)]
mod tests {
    use super::super::prefixes::generate;
    use super::super::render::{
        render_declarations, render_registrations, Section, SiPrefixEmitter,
    };
    use crate::units::{PREFIXES, UNITS};

    #[test]
    fn test_kilogram_never_generated() {
        let emitter = SiPrefixEmitter::standard();
        let output = emitter.emit(Section::All);

        assert!(!output.contains("KILOGRAM"));
        assert!(!output.contains("\"kg\""));
        // Other gram prefixes are still present
        assert!(output.contains("pub static MEGAGRAM: Base = Base::new(\"Mg\", Mass, 1e6);"));
        assert!(output.contains("base!(units::MILLIGRAM),"));
    }

    #[test]
    fn test_millimeter_followed_by_centimeter() {
        let generated = generate(&UNITS, &PREFIXES);

        let decls = render_declarations(&generated);
        let decl_lines: Vec<&str> = decls
            .lines()
            .filter(|l| l.contains("MILLIMETER") || l.contains("CENTIMETER"))
            .collect();
        assert_eq!(
            decl_lines,
            vec![
                "pub static MILLIMETER: Base = Base::new(\"mm\", Length, 1e-3);",
                "pub static CENTIMETER: Base = Base::new(\"cm\", Length, 1e-2);",
            ]
        );

        let regs = render_registrations(&generated);
        let reg_lines: Vec<&str> = regs
            .lines()
            .filter(|l| l.contains("MILLIMETER") || l.contains("CENTIMETER"))
            .collect();
        assert_eq!(
            reg_lines,
            vec![
                "        base!(units::MILLIMETER),",
                "        base!(units::CENTIMETER),",
            ]
        );
    }

    #[test]
    fn test_centi_alias_only_for_meter() {
        let output = SiPrefixEmitter::standard().emit(Section::All);
        assert_eq!(output.matches("pub static CENTI").count(), 1);
        assert_eq!(output.matches("units::CENTI").count(), 1);
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = SiPrefixEmitter::standard().emit(Section::All);
        let second = SiPrefixEmitter::standard().emit(Section::All);
        assert_eq!(first, second);
    }

    #[test]
    fn test_blocks_are_parallel() {
        let generated = generate(&UNITS, &PREFIXES);
        let decls = render_declarations(&generated);
        let regs = render_registrations(&generated);

        let declared: Vec<&str> = decls
            .lines()
            .filter_map(|l| l.strip_prefix("pub static "))
            .filter_map(|l| l.split(':').next())
            .collect();
        let registered: Vec<&str> = regs
            .lines()
            .filter_map(|l| l.split("units::").nth(1))
            .filter_map(|l| l.split(')').next())
            .collect();

        assert_eq!(declared.len(), generated.len());
        assert_eq!(declared, registered);
    }

    #[test]
    fn test_table_order_units_outer_prefixes_inner() {
        let regs = SiPrefixEmitter::standard().emit(Section::Registrations);
        let lines: Vec<&str> = regs.lines().collect();
        assert_eq!(lines[0], "        // SI prefixes");
        assert_eq!(lines[1], "        base!(units::PETASECOND),");
        assert_eq!(lines[10], "        base!(units::FEMTOSECOND),");
        assert_eq!(lines[11], "        base!(units::PETAMETER),");
        assert_eq!(lines.last(), Some(&"        unit!(&*units::FEMTOTESLA),"));
    }
}
