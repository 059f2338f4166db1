// Bindkit Config Integration Tests
//
// End-to-end checks from directive text to the final binding tables.
//
// Run with: cargo test -p bindkit-core --test config_test

mod tests {
    use bindkit_core::{
        compile_map, compile_mouse_map, parse_map, parse_mods, parse_mouse_map, parse_shortcut,
        Action, BindingConfig, BindingDefinition, ModMask, Modifier, MouseEvent, Trigger,
    };

    const SAMPLE: &str = r#"
# Sample bindings
kitty_mod ctrl+shift

map kitty_mod+enter     new_window
map kitty_mod+t         new_tab_with_cwd
map ctrl+1              goto_tab 1
map kitty_mod+a>kitty_mod+h  kitten hints --type url
map f11                 toggle_fullscreen
map ctrl+plus           change_font_size all +2.0
map ctrl+shift+f5       load_config_file

kitten_alias hints hints --hints-offset=0

mouse_map left click ungrabbed mouse_handle_click selection link prompt
mouse_map kitty_mod+right press grabbed,ungrabbed mouse_select_command_output
mouse_map middle release ungrabbed paste_from_selection

# invalid lines are skipped
map ctrl+unknownkey new_tab
map hyperdrive+a new_tab
mouse_map left hover grabbed paste
map ctrl+2 goto_tab second
unknown_option value
"#;

    fn ctrl_shift() -> ModMask {
        Modifier::Control | Modifier::Shift
    }

    #[test]
    fn test_sample_file_counts() {
        let config = BindingConfig::parse(SAMPLE);
        assert_eq!(config.key_definitions().len(), 7);
        assert_eq!(config.mouse_mappings().len(), 4);
        assert_eq!(config.kitten_aliases().len(), 1);

        let table = config.into_table();
        assert_eq!(table.key_count(), 6);
        assert_eq!(table.sequence_count(), 1);
        assert_eq!(table.mouse_count(), 4);
    }

    #[test]
    fn test_sample_file_lookups() {
        let table = BindingConfig::parse(SAMPLE).into_table();

        let action = table
            .key_action(&parse_shortcut("ctrl+shift+enter").unwrap())
            .unwrap();
        assert_eq!(action, &Action::new("new_window", vec![]));

        let action = table.key_action(&parse_shortcut("ctrl+1").unwrap()).unwrap();
        assert_eq!(action.args(), &["1"]);

        let action = table
            .sequence_action(
                &parse_shortcut("ctrl+shift+a").unwrap(),
                &[parse_shortcut("ctrl+shift+h").unwrap()],
            )
            .unwrap();
        assert_eq!(action.func(), "kitten");
        assert_eq!(action.args(), &["hints", "--hints-offset=0 --type url"]);

        let event = MouseEvent {
            button: 2,
            mods: ctrl_shift(),
            repeat_count: 1,
            grabbed: true,
        };
        assert_eq!(
            table.mouse_action(&event).unwrap().func(),
            "mouse_select_command_output"
        );
    }

    #[test]
    fn test_no_trigger_in_table_is_unresolved() {
        let table = BindingConfig::parse(SAMPLE).into_table();
        for (trigger, _) in table.keys() {
            assert!(!trigger.mods.has_placeholder());
            assert!(trigger.is_valid());
        }
        for (head, tail, _) in table.sequences() {
            assert!(!head.mods.has_placeholder());
            assert!(tail.iter().all(|t| !t.mods.has_placeholder() && t.is_valid()));
        }
        for (event, _) in table.mouse() {
            assert!(!event.mods.has_placeholder());
        }
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        let mut config = BindingConfig::parse("map ctrl+t new_tab\nmap ctrl+w close_window\n");
        config.apply_str("map ctrl+t no_op\nmap ctrl+w close_tab\n");
        let table = config.into_table();
        assert!(table.key_action(&parse_shortcut("ctrl+t").unwrap()).is_none());
        assert_eq!(
            table.key_action(&parse_shortcut("ctrl+w").unwrap()).unwrap().func(),
            "close_tab"
        );
    }

    #[test]
    fn test_modifier_order_independent() {
        assert_eq!(
            parse_mods(["ctrl", "shift"], "ctrl+shift+a"),
            parse_mods(["shift", "ctrl"], "shift+ctrl+a")
        );
        assert_eq!(
            parse_shortcut("ctrl+shift+a").unwrap(),
            parse_shortcut("shift+ctrl+a").unwrap()
        );
    }

    #[test]
    fn test_shortcut_examples() {
        assert_eq!(
            parse_shortcut("ctrl+a").unwrap(),
            Trigger::new(ModMask::from(Modifier::Control), false, 'a' as u32)
        );
        assert_eq!(
            parse_shortcut("A").unwrap(),
            Trigger::new(ModMask::NONE, false, 'a' as u32)
        );
        assert_eq!(
            parse_shortcut("0x41").unwrap(),
            Trigger::new(ModMask::NONE, true, 0x41)
        );
    }

    #[test]
    fn test_primary_resolution_is_idempotent() {
        let mut def = compile_map("primary+enter new_window").unwrap();
        def.resolve(ctrl_shift());
        assert_eq!(def.trigger().mods, ctrl_shift());
        let once = def.clone();
        def.resolve(ctrl_shift());
        assert_eq!(def, once);
    }

    #[test]
    fn test_sequence_definition() {
        let def = compile_map("ctrl+a>ctrl+b new_tab").unwrap();
        assert!(def.is_sequence());
        assert_eq!(def.trigger(), &parse_shortcut("ctrl+a").unwrap());
        assert_eq!(def.rest(), &[parse_shortcut("ctrl+b").unwrap()]);
        assert_eq!(def.action(), &Action::new("new_tab", vec![]));
    }

    #[test]
    fn test_mouse_examples() {
        let mappings = compile_mouse_map("left click ungrabbed close_tab").unwrap();
        assert_eq!(mappings.len(), 1);
        let mapping = &mappings[0];
        assert_eq!(mapping.button, 1);
        assert_eq!(mapping.mods, ModMask::NONE);
        assert_eq!(mapping.repeat_count, -2);
        assert!(!mapping.grabbed);
        assert_eq!(mapping.action, Action::new("close_tab", vec![]));

        let mappings = compile_mouse_map("left press grabbed,ungrabbed close_tab").unwrap();
        assert_eq!(mappings.len(), 2);
        let mut first = mappings[0].clone();
        first.grabbed = mappings[1].grabbed;
        assert_eq!(first, mappings[1]);
    }

    #[test]
    fn test_malformed_input_never_panics() {
        let inputs = [
            "",
            " ",
            "+",
            "++",
            ">",
            ">>>",
            "ctrl+",
            "ctrl+>",
            "0x",
            "0xzz new_tab",
            "ctrl+a launch 'unterminated",
            "ctrl+a send_text",
            "a>b>",
            "⌘+c copy_to_clipboard",
            "left",
            "b9 click grabbed no_op",
            "left click , no_op",
        ];
        for input in inputs {
            let _ = parse_map(input);
            let _ = parse_mouse_map(input);
            let mut config = BindingConfig::new();
            config.apply_line(input);
            config.apply_line(&format!("map {}", input));
            config.apply_line(&format!("mouse_map {}", input));
            let _ = config.into_table();
        }
    }
}
