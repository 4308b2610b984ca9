use crate::discriminator::{
    self,
    Discriminator,
    DISCRIMINATOR_LEN,
};

pub mod add_gif;
pub mod start_stuff_off;

pub use add_gif::AddGif;
pub use start_stuff_off::StartStuffOff;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum InstructionTag {
    StartStuffOff,
    AddGif,
}

impl InstructionTag {
    pub const fn discriminator(&self) -> Discriminator {
        match self {
            Self::StartStuffOff => discriminator::START_STUFF_OFF,
            Self::AddGif => discriminator::ADD_GIF,
        }
    }

    /// Reads the tag from the leading discriminator bytes of raw instruction data.
    pub fn from_instruction_data(data: &[u8]) -> Option<Self> {
        let tag: Discriminator = data.get(..DISCRIMINATOR_LEN)?.try_into().ok()?;
        match tag {
            discriminator::START_STUFF_OFF => Some(Self::StartStuffOff),
            discriminator::ADD_GIF => Some(Self::AddGif),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::InstructionTag;

    #[test]
    fn instruction_tag_from_data_exhaustive() {
        for variant in InstructionTag::iter() {
            let data = variant.discriminator();
            assert_eq!(InstructionTag::from_instruction_data(&data), Some(variant));
        }
    }

    #[test]
    fn instruction_tag_rejects_short_or_unknown_data() {
        assert_eq!(InstructionTag::from_instruction_data(&[]), None);
        assert_eq!(InstructionTag::from_instruction_data(&[126, 54, 85]), None);
        assert_eq!(InstructionTag::from_instruction_data(&[0; 8]), None);
    }
}
