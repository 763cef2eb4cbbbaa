//! Unit tests for sp-program.

#[cfg(test)]
mod spec {
    use sp_core::{FloorId, Vec2};

    use crate::{ProgramSpec, RoomShape, RoomSpec};

    #[test]
    fn room_spec_setters() {
        let room = RoomSpec::new("lobby", RoomShape::Circle { radius: 2.0 })
            .on_floor(FloorId(1))
            .at(Vec2::new(3.0, 4.0))
            .adjacent_to("entry")
            .adjacent_to("corridor");
        assert_eq!(room.name, "lobby");
        assert_eq!(room.floor, FloorId(1));
        assert_eq!(room.position, Some(Vec2::new(3.0, 4.0)));
        assert_eq!(room.adjacent_to, ["entry", "corridor"]);
    }

    #[test]
    fn has_adjacency() {
        let mut program = ProgramSpec::new(vec![
            RoomSpec::new("a", RoomShape::Circle { radius: 1.0 }),
            RoomSpec::new("b", RoomShape::Circle { radius: 1.0 }),
        ]);
        assert!(!program.has_adjacency());
        program.rooms[1] = program.rooms[1].clone().adjacent_to("a");
        assert!(program.has_adjacency());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use sp_core::{FloorId, Vec2};

    use crate::{ProgramError, RoomShape, load_program_reader};

    const GOOD: &str = "\
name,shape,size,aspect,floor,x,y,adjacent_to
entry,rect,12,,0,0,0,lobby
lobby,rect,40,1.2,0,,,corridor;entry
office,circle,3.5,,1,,,
";

    #[test]
    fn loads_rooms_in_order() {
        let program = load_program_reader(Cursor::new(GOOD)).unwrap();
        assert_eq!(program.len(), 3);
        assert_eq!(program.rooms[0].name, "entry");
        assert_eq!(program.rooms[1].name, "lobby");
        assert_eq!(program.rooms[2].name, "office");
    }

    #[test]
    fn shapes_and_optionals() {
        let program = load_program_reader(Cursor::new(GOOD)).unwrap();

        assert_eq!(program.rooms[0].shape, RoomShape::RectArea { area: 12.0, aspect: None });
        assert_eq!(program.rooms[0].position, Some(Vec2::new(0.0, 0.0)));
        assert_eq!(program.rooms[0].floor, FloorId::GROUND);

        assert_eq!(
            program.rooms[1].shape,
            RoomShape::RectArea { area: 40.0, aspect: Some(1.2) }
        );
        assert_eq!(program.rooms[1].position, None);
        assert_eq!(program.rooms[1].adjacent_to, ["corridor", "entry"]);

        assert_eq!(program.rooms[2].shape, RoomShape::Circle { radius: 3.5 });
        assert_eq!(program.rooms[2].floor, FloorId(1));
        assert!(program.rooms[2].adjacent_to.is_empty());
    }

    #[test]
    fn adjacency_flag_reflects_rows() {
        let program = load_program_reader(Cursor::new(GOOD)).unwrap();
        assert!(program.has_adjacency());

        let bare = "\
name,shape,size,aspect,floor,x,y,adjacent_to
a,circle,1,,,,,
b,circle,1,,,,,
";
        let program = load_program_reader(Cursor::new(bare)).unwrap();
        assert!(!program.has_adjacency(), "blank adjacency column means ring fallback");
    }

    #[test]
    fn duplicate_name_rejected() {
        let csv = "\
name,shape,size,aspect,floor,x,y,adjacent_to
a,circle,1,,,,,
a,circle,2,,,,,
";
        match load_program_reader(Cursor::new(csv)) {
            Err(ProgramError::DuplicateRoom(name)) => assert_eq!(name, "a"),
            other => panic!("expected DuplicateRoom, got {other:?}"),
        }
    }

    #[test]
    fn unknown_shape_rejected() {
        let csv = "\
name,shape,size,aspect,floor,x,y,adjacent_to
a,hexagon,1,,,,,
";
        assert!(matches!(
            load_program_reader(Cursor::new(csv)),
            Err(ProgramError::Parse(_))
        ));
    }

    #[test]
    fn nonpositive_size_rejected() {
        let csv = "\
name,shape,size,aspect,floor,x,y,adjacent_to
a,circle,-1,,,,,
";
        assert!(matches!(
            load_program_reader(Cursor::new(csv)),
            Err(ProgramError::Parse(_))
        ));
    }

    #[test]
    fn half_given_position_rejected() {
        let csv = "\
name,shape,size,aspect,floor,x,y,adjacent_to
a,circle,1,,,5,,
";
        match load_program_reader(Cursor::new(csv)) {
            Err(ProgramError::Parse(msg)) => {
                assert!(msg.contains("x and y"), "unexpected message: {msg}")
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_programme_is_empty() {
        let csv = "name,shape,size,aspect,floor,x,y,adjacent_to\n";
        let program = load_program_reader(Cursor::new(csv)).unwrap();
        assert!(program.is_empty());
    }
}
