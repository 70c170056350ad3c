use thiserror::Error;

/// Why a door cell failed placement validation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DoorPlacementFault {
    /// Neither neighbour pair is solid; the door has nothing to hang between.
    Unenclosed,
    /// Both neighbour pairs are solid; the slide axis is ambiguous.
    Enclosed,
}

impl std::fmt::Display for DoorPlacementFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorPlacementFault::Unenclosed => write!(f, "no solid neighbour pair"),
            DoorPlacementFault::Enclosed => write!(f, "both neighbour pairs solid"),
        }
    }
}

/// Level authoring errors found while generating geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid door placement at ({x}, {z}): {fault}")]
    InvalidDoorPlacement {
        x: i32,
        z: i32,
        fault: DoorPlacementFault,
    },
}
