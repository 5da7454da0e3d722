use std::fmt;

use crate::error::ChannelRangeError;

/// One color component of an RGB565 value.
///
/// The set of channels is closed: every selector passed to
/// [`Rgb565::set_channel`] names a real channel, so there is no
/// unknown-channel path to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in packing order, most significant first.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Largest value the channel can hold (31 for 5 bits, 63 for 6 bits).
    pub const fn max(self) -> u8 {
        match self {
            Channel::Red | Channel::Blue => 0x1f,
            Channel::Green => 0x3f,
        }
    }

    /// Bit mask of the channel within a packed 16-bit word.
    pub const fn mask(self) -> u16 {
        match self {
            Channel::Red => 0xf800,
            Channel::Green => 0x07e0,
            Channel::Blue => 0x001f,
        }
    }

    /// Bit offset of the channel within a packed 16-bit word.
    pub const fn shift(self) -> u32 {
        match self {
            Channel::Red => 11,
            Channel::Green => 5,
            Channel::Blue => 0,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// An RGB565 pixel with separately stored 5/6/5-bit channels.
///
/// Channels are only written through [`Rgb565::set_channel`], which rejects
/// values wider than the channel, so every stored value fits its bit field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb565 {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb565 {
    /// Split a packed 16-bit word into its channels. Lossless.
    pub fn from_word(word: u16) -> Self {
        Self {
            red: unpack_channel(word, Channel::Red),
            green: unpack_channel(word, Channel::Green),
            blue: unpack_channel(word, Channel::Blue),
        }
    }

    /// Current value of a channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Set a channel, rejecting values that exceed its bit width.
    ///
    /// On error the channel keeps its previous value. The error is meant to
    /// be reported and then ignored; it never invalidates the pixel.
    pub fn set_channel(&mut self, value: u8, channel: Channel) -> Result<(), ChannelRangeError> {
        if value > channel.max() {
            return Err(ChannelRangeError {
                channel,
                value: i32::from(value),
            });
        }
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        Ok(())
    }

    /// Pack into `red << 11 | green << 5 | blue`.
    pub fn pack(&self) -> u16 {
        Channel::ALL
            .iter()
            .fold(0, |word, &c| word | (u16::from(self.channel(c)) << c.shift()))
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> u16 {
        color.pack()
    }
}

/// Extract one channel from a raw 16-bit word, unscaled.
#[inline]
pub fn unpack_channel(word: u16, channel: Channel) -> u8 {
    ((word & channel.mask()) >> channel.shift()) as u8
}
