//! Model dan schema bersama untuk integration test
//!
//! Omnibus memuat semua field type: scalar, string/bytes, nested message,
//! dua oneof (Fruit dan Everything), serta repeated list packed/unpacked.

#![allow(dead_code)]

use std::sync::OnceLock;

use protoparse::{
    ByteSource, Encode, Encoder, FieldDefinition, FieldSink, FieldType, MessageReader, OneOf,
    Result, Schema, Value,
};

// ============================================================================
// FIELD TABLES
// ============================================================================

pub static MEMO: FieldDefinition = FieldDefinition::of("memo", FieldType::String, false, 1);
pub static RANDOM_BYTES: FieldDefinition = FieldDefinition::of("randomBytes", FieldType::Bytes, false, 2);
pub static NESTED: FieldDefinition = FieldDefinition::of("nested", FieldType::Message, false, 3);

pub static INT32_NUMBER: FieldDefinition = FieldDefinition::of("int32Number", FieldType::Int32, false, 10);
pub static INT64_NUMBER: FieldDefinition = FieldDefinition::of("int64Number", FieldType::Int64, false, 11);
pub static UINT32_NUMBER: FieldDefinition = FieldDefinition::of("uint32Number", FieldType::UInt32, false, 12);
pub static UINT64_NUMBER: FieldDefinition = FieldDefinition::of("uint64Number", FieldType::UInt64, false, 13);
pub static FLAG: FieldDefinition = FieldDefinition::of("flag", FieldType::Bool, false, 14);
pub static SUIT: FieldDefinition = FieldDefinition::of("suitEnum", FieldType::Enum, false, 15);
pub static SFIXED32_NUMBER: FieldDefinition = FieldDefinition::of("sfixed32Number", FieldType::SFixed32, false, 20);
pub static FIXED32_NUMBER: FieldDefinition = FieldDefinition::of("fixed32Number", FieldType::Fixed32, false, 21);
pub static FLOAT_NUMBER: FieldDefinition = FieldDefinition::of("floatNumber", FieldType::Float, false, 22);
pub static SFIXED64_NUMBER: FieldDefinition = FieldDefinition::of("sfixed64Number", FieldType::SFixed64, false, 25);
pub static FIXED64_NUMBER: FieldDefinition = FieldDefinition::of("fixed64Number", FieldType::Fixed64, false, 26);
pub static DOUBLE_NUMBER: FieldDefinition = FieldDefinition::of("doubleNumber", FieldType::Double, false, 27);
pub static SINT32_NUMBER: FieldDefinition = FieldDefinition::of("sint32Number", FieldType::SInt32, false, 30);
pub static SINT64_NUMBER: FieldDefinition = FieldDefinition::of("sint64Number", FieldType::SInt64, false, 31);

// oneof fruit
pub static FRUIT_APPLE: FieldDefinition = FieldDefinition::of("fruit.apple", FieldType::Message, false, 200);
pub static FRUIT_BANANA: FieldDefinition = FieldDefinition::of("fruit.banana", FieldType::Message, false, 201);

// oneof everything
pub static INT32_UNIQUE: FieldDefinition = FieldDefinition::of("int32Unique", FieldType::Int32, false, 210);
pub static INT64_UNIQUE: FieldDefinition = FieldDefinition::of("int64Unique", FieldType::Int64, false, 211);
pub static UINT32_UNIQUE: FieldDefinition = FieldDefinition::of("uint32Unique", FieldType::UInt32, false, 212);
pub static UINT64_UNIQUE: FieldDefinition = FieldDefinition::of("uint64Unique", FieldType::UInt64, false, 213);
pub static FLAG_UNIQUE: FieldDefinition = FieldDefinition::of("flagUnique", FieldType::Bool, false, 214);
pub static SUIT_UNIQUE: FieldDefinition = FieldDefinition::of("suitEnumUnique", FieldType::Enum, false, 215);
pub static SFIXED32_UNIQUE: FieldDefinition = FieldDefinition::of("sfixed32Unique", FieldType::SFixed32, false, 220);
pub static FIXED32_UNIQUE: FieldDefinition = FieldDefinition::of("fixed32Unique", FieldType::Fixed32, false, 221);
pub static FLOAT_UNIQUE: FieldDefinition = FieldDefinition::of("floatUnique", FieldType::Float, false, 222);
pub static SFIXED64_UNIQUE: FieldDefinition = FieldDefinition::of("sfixed64Unique", FieldType::SFixed64, false, 225);
pub static FIXED64_UNIQUE: FieldDefinition = FieldDefinition::of("fixed64Unique", FieldType::Fixed64, false, 226);
pub static DOUBLE_UNIQUE: FieldDefinition = FieldDefinition::of("doubleUnique", FieldType::Double, false, 227);
pub static SINT32_UNIQUE: FieldDefinition = FieldDefinition::of("sint32Unique", FieldType::SInt32, false, 230);
pub static SINT64_UNIQUE: FieldDefinition = FieldDefinition::of("sint64Unique", FieldType::SInt64, false, 231);
pub static MEMO_UNIQUE: FieldDefinition = FieldDefinition::of("memoUnique", FieldType::String, false, 251);
pub static RANDOM_BYTES_UNIQUE: FieldDefinition = FieldDefinition::of("randomBytesUnique", FieldType::Bytes, false, 252);
pub static NESTED_UNIQUE: FieldDefinition = FieldDefinition::of("nestedUnique", FieldType::Message, false, 253);

// repeated
pub static INT32_LIST: FieldDefinition = FieldDefinition::of("int32NumberList", FieldType::Int32, true, 300);
pub static INT64_LIST: FieldDefinition = FieldDefinition::of("int64NumberList", FieldType::Int64, true, 301);
pub static UINT32_LIST: FieldDefinition = FieldDefinition::of("uint32NumberList", FieldType::UInt32, true, 302);
pub static UINT64_LIST: FieldDefinition = FieldDefinition::of("uint64NumberList", FieldType::UInt64, true, 303);
pub static FLAG_LIST: FieldDefinition = FieldDefinition::of("flagList", FieldType::Bool, true, 304);
pub static SUIT_LIST: FieldDefinition = FieldDefinition::of("suitEnumList", FieldType::Enum, true, 305);
pub static SINT32_LIST: FieldDefinition = FieldDefinition::of("sint32NumberList", FieldType::SInt32, true, 306);
pub static SINT64_LIST: FieldDefinition = FieldDefinition::of("sint64NumberList", FieldType::SInt64, true, 307);
pub static SFIXED32_LIST: FieldDefinition = FieldDefinition::of("sfixed32NumberList", FieldType::SFixed32, true, 308);
pub static SFIXED64_LIST: FieldDefinition = FieldDefinition::of("sfixed64NumberList", FieldType::SFixed64, true, 309);
pub static FIXED32_LIST: FieldDefinition = FieldDefinition::of("fixed32NumberList", FieldType::Fixed32, true, 310);
pub static FIXED64_LIST: FieldDefinition = FieldDefinition::of("fixed64NumberList", FieldType::Fixed64, true, 311);
pub static FLOAT_LIST: FieldDefinition = FieldDefinition::of("floatNumberList", FieldType::Float, true, 312);
pub static DOUBLE_LIST: FieldDefinition = FieldDefinition::of("doubleNumberList", FieldType::Double, true, 313);
pub static MEMO_LIST: FieldDefinition = FieldDefinition::of("memoList", FieldType::String, true, 314);
pub static RANDOM_BYTES_LIST: FieldDefinition = FieldDefinition::of("randomBytesList", FieldType::Bytes, true, 315);
pub static NESTED_LIST: FieldDefinition = FieldDefinition::of("nestedList", FieldType::Message, true, 316);
pub static FRUITS_LIST: FieldDefinition = FieldDefinition::of("fruitsList", FieldType::Message, true, 317);

// Nested
pub static NESTED_MEMO: FieldDefinition = FieldDefinition::of("nestedMemo", FieldType::String, false, 100);

// Apple / Banana
pub static VARIETY: FieldDefinition = FieldDefinition::of("variety", FieldType::String, false, 1);

// Fruits
pub static FRUITS_APPLE: FieldDefinition = FieldDefinition::of("apple", FieldType::Message, false, 1);
pub static FRUITS_BANANA: FieldDefinition = FieldDefinition::of("banana", FieldType::Message, false, 2);

/// Lookup Omnibus berbasis `match`
pub fn omnibus_field(number: u32) -> Option<&'static FieldDefinition> {
    let field = match number {
        1 => &MEMO,
        2 => &RANDOM_BYTES,
        3 => &NESTED,
        10 => &INT32_NUMBER,
        11 => &INT64_NUMBER,
        12 => &UINT32_NUMBER,
        13 => &UINT64_NUMBER,
        14 => &FLAG,
        15 => &SUIT,
        20 => &SFIXED32_NUMBER,
        21 => &FIXED32_NUMBER,
        22 => &FLOAT_NUMBER,
        25 => &SFIXED64_NUMBER,
        26 => &FIXED64_NUMBER,
        27 => &DOUBLE_NUMBER,
        30 => &SINT32_NUMBER,
        31 => &SINT64_NUMBER,
        200 => &FRUIT_APPLE,
        201 => &FRUIT_BANANA,
        210 => &INT32_UNIQUE,
        211 => &INT64_UNIQUE,
        212 => &UINT32_UNIQUE,
        213 => &UINT64_UNIQUE,
        214 => &FLAG_UNIQUE,
        215 => &SUIT_UNIQUE,
        220 => &SFIXED32_UNIQUE,
        221 => &FIXED32_UNIQUE,
        222 => &FLOAT_UNIQUE,
        225 => &SFIXED64_UNIQUE,
        226 => &FIXED64_UNIQUE,
        227 => &DOUBLE_UNIQUE,
        230 => &SINT32_UNIQUE,
        231 => &SINT64_UNIQUE,
        251 => &MEMO_UNIQUE,
        252 => &RANDOM_BYTES_UNIQUE,
        253 => &NESTED_UNIQUE,
        300 => &INT32_LIST,
        301 => &INT64_LIST,
        302 => &UINT32_LIST,
        303 => &UINT64_LIST,
        304 => &FLAG_LIST,
        305 => &SUIT_LIST,
        306 => &SINT32_LIST,
        307 => &SINT64_LIST,
        308 => &SFIXED32_LIST,
        309 => &SFIXED64_LIST,
        310 => &FIXED32_LIST,
        311 => &FIXED64_LIST,
        312 => &FLOAT_LIST,
        313 => &DOUBLE_LIST,
        314 => &MEMO_LIST,
        315 => &RANDOM_BYTES_LIST,
        316 => &NESTED_LIST,
        317 => &FRUITS_LIST,
        _ => return None,
    };
    Some(field)
}

pub fn nested_field(number: u32) -> Option<&'static FieldDefinition> {
    match number {
        100 => Some(&NESTED_MEMO),
        _ => None,
    }
}

pub fn fruits_field(number: u32) -> Option<&'static FieldDefinition> {
    match number {
        1 => Some(&FRUITS_APPLE),
        2 => Some(&FRUITS_BANANA),
        _ => None,
    }
}

/// Apple dan Banana berbagi satu tabel
pub fn fruit_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| Schema::new([VARIETY.clone()]).expect("valid fruit schema"))
}

// ============================================================================
// MODELS
// ============================================================================

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suit {
    #[default]
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub fn from_ordinal(ordinal: i32) -> Suit {
        match ordinal {
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            3 => Suit::Clubs,
            _ => Suit::Spades,
        }
    }

    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Nested {
    pub nested_memo: String,
}

impl Nested {
    pub fn new(memo: &str) -> Self {
        Self {
            nested_memo: memo.to_owned(),
        }
    }
}

impl FieldSink for Nested {
    fn scalar(&mut self, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
        if field.number() == 100 {
            self.nested_memo = value.as_str().unwrap_or_default().to_owned();
        }
        Ok(())
    }
}

impl Encode for Nested {
    fn encode(&self, out: &mut Encoder) -> Result<()> {
        out.string(&NESTED_MEMO, &self.nested_memo)
    }
}

/// Apple dan Banana punya bentuk yang sama
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variety {
    pub variety: String,
}

impl Variety {
    pub fn new(variety: &str) -> Self {
        Self {
            variety: variety.to_owned(),
        }
    }
}

impl FieldSink for Variety {
    fn scalar(&mut self, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
        if field.number() == 1 {
            self.variety = value.as_str().unwrap_or_default().to_owned();
        }
        Ok(())
    }
}

impl Encode for Variety {
    fn encode(&self, out: &mut Encoder) -> Result<()> {
        out.string(&VARIETY, &self.variety)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fruit {
    Apple,
    Banana,
}

pub type FruitOneOf = OneOf<Fruit, Variety>;

fn read_fruit<S: ByteSource + ?Sized>(
    slot: &mut Option<FruitOneOf>,
    field: &FieldDefinition,
    kind: Fruit,
    reader: &mut MessageReader<'_, S>,
) -> Result<()> {
    let variety: Variety = reader.decode_into(fruit_schema())?;
    OneOf::replace(slot, field.number(), kind, variety);
    Ok(())
}

/// Wrapper untuk repeated oneof
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fruits {
    pub fruit: Option<FruitOneOf>,
}

impl FieldSink for Fruits {
    fn message<S: ByteSource + ?Sized>(
        &mut self,
        field: &FieldDefinition,
        reader: &mut MessageReader<'_, S>,
    ) -> Result<()> {
        match field.number() {
            1 => read_fruit(&mut self.fruit, field, Fruit::Apple, reader),
            2 => read_fruit(&mut self.fruit, field, Fruit::Banana, reader),
            _ => Ok(()),
        }
    }
}

impl Encode for Fruits {
    fn encode(&self, out: &mut Encoder) -> Result<()> {
        match &self.fruit {
            Some(fruit) => {
                let def = match fruit.kind() {
                    Fruit::Apple => &FRUITS_APPLE,
                    Fruit::Banana => &FRUITS_BANANA,
                };
                out.message(def, Some(fruit.value()))
            }
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Everything {
    Int32,
    Int64,
    UInt32,
    UInt64,
    Flag,
    Suit,
    SFixed32,
    Fixed32,
    Float,
    SFixed64,
    Fixed64,
    Double,
    SInt32,
    SInt64,
    Memo,
    RandomBytes,
    Nested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Unique {
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Flag(bool),
    Suit(Suit),
    Float(f32),
    Double(f64),
    Memo(String),
    RandomBytes(Vec<u8>),
    Nested(Nested),
}

pub type EverythingOneOf = OneOf<Everything, Unique>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Omnibus {
    pub memo: String,
    pub random_bytes: Vec<u8>,
    pub nested: Option<Nested>,

    pub int32_number: i32,
    pub int64_number: i64,
    pub uint32_number: u32,
    pub uint64_number: u64,
    pub flag: bool,
    pub suit: Suit,
    pub sfixed32_number: i32,
    pub fixed32_number: u32,
    pub float_number: f32,
    pub sfixed64_number: i64,
    pub fixed64_number: u64,
    pub double_number: f64,
    pub sint32_number: i32,
    pub sint64_number: i64,

    pub fruit: Option<FruitOneOf>,
    pub everything: Option<EverythingOneOf>,

    pub int32_list: Vec<i32>,
    pub int64_list: Vec<i64>,
    pub uint32_list: Vec<u32>,
    pub uint64_list: Vec<u64>,
    pub flag_list: Vec<bool>,
    pub suit_list: Vec<Suit>,
    pub sint32_list: Vec<i32>,
    pub sint64_list: Vec<i64>,
    pub sfixed32_list: Vec<i32>,
    pub sfixed64_list: Vec<i64>,
    pub fixed32_list: Vec<u32>,
    pub fixed64_list: Vec<u64>,
    pub float_list: Vec<f32>,
    pub double_list: Vec<f64>,
    pub memo_list: Vec<String>,
    pub random_bytes_list: Vec<Vec<u8>>,
    pub nested_list: Vec<Nested>,
    pub fruits_list: Vec<Fruits>,
}

impl Omnibus {
    fn unique(&mut self, number: u32, kind: Everything, value: Unique) {
        OneOf::replace(&mut self.everything, number, kind, value);
    }
}

impl FieldSink for Omnibus {
    fn scalar(&mut self, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
        let number = field.number();
        let int32 = || value.as_i32().unwrap_or_default();
        let int64 = || value.as_i64().unwrap_or_default();
        let uint32 = || value.as_u32().unwrap_or_default();
        let uint64 = || value.as_u64().unwrap_or_default();
        let flag = || value.as_bool().unwrap_or_default();
        let float = || value.as_f32().unwrap_or_default();
        let double = || value.as_f64().unwrap_or_default();
        let text = || value.as_str().unwrap_or_default().to_owned();
        let bytes = || value.as_bytes().unwrap_or_default().to_vec();

        match number {
            1 => self.memo = text(),
            2 => self.random_bytes = bytes(),
            10 => self.int32_number = int32(),
            11 => self.int64_number = int64(),
            12 => self.uint32_number = uint32(),
            13 => self.uint64_number = uint64(),
            14 => self.flag = flag(),
            15 => self.suit = Suit::from_ordinal(int32()),
            20 => self.sfixed32_number = int32(),
            21 => self.fixed32_number = uint32(),
            22 => self.float_number = float(),
            25 => self.sfixed64_number = int64(),
            26 => self.fixed64_number = uint64(),
            27 => self.double_number = double(),
            30 => self.sint32_number = int32(),
            31 => self.sint64_number = int64(),

            210 => self.unique(number, Everything::Int32, Unique::Int32(int32())),
            211 => self.unique(number, Everything::Int64, Unique::Int64(int64())),
            212 => self.unique(number, Everything::UInt32, Unique::UInt32(uint32())),
            213 => self.unique(number, Everything::UInt64, Unique::UInt64(uint64())),
            214 => self.unique(number, Everything::Flag, Unique::Flag(flag())),
            215 => self.unique(number, Everything::Suit, Unique::Suit(Suit::from_ordinal(int32()))),
            220 => self.unique(number, Everything::SFixed32, Unique::Int32(int32())),
            221 => self.unique(number, Everything::Fixed32, Unique::UInt32(uint32())),
            222 => self.unique(number, Everything::Float, Unique::Float(float())),
            225 => self.unique(number, Everything::SFixed64, Unique::Int64(int64())),
            226 => self.unique(number, Everything::Fixed64, Unique::UInt64(uint64())),
            227 => self.unique(number, Everything::Double, Unique::Double(double())),
            230 => self.unique(number, Everything::SInt32, Unique::Int32(int32())),
            231 => self.unique(number, Everything::SInt64, Unique::Int64(int64())),
            251 => self.unique(number, Everything::Memo, Unique::Memo(text())),
            252 => self.unique(number, Everything::RandomBytes, Unique::RandomBytes(bytes())),

            300 => self.int32_list.push(int32()),
            301 => self.int64_list.push(int64()),
            302 => self.uint32_list.push(uint32()),
            303 => self.uint64_list.push(uint64()),
            304 => self.flag_list.push(flag()),
            305 => self.suit_list.push(Suit::from_ordinal(int32())),
            306 => self.sint32_list.push(int32()),
            307 => self.sint64_list.push(int64()),
            308 => self.sfixed32_list.push(int32()),
            309 => self.sfixed64_list.push(int64()),
            310 => self.fixed32_list.push(uint32()),
            311 => self.fixed64_list.push(uint64()),
            312 => self.float_list.push(float()),
            313 => self.double_list.push(double()),
            314 => self.memo_list.push(text()),
            315 => self.random_bytes_list.push(bytes()),
            _ => {}
        }
        Ok(())
    }

    fn message<S: ByteSource + ?Sized>(
        &mut self,
        field: &FieldDefinition,
        reader: &mut MessageReader<'_, S>,
    ) -> Result<()> {
        match field.number() {
            3 => self.nested = Some(reader.decode_into(&nested_field)?),
            200 => read_fruit(&mut self.fruit, field, Fruit::Apple, reader)?,
            201 => read_fruit(&mut self.fruit, field, Fruit::Banana, reader)?,
            253 => {
                let nested: Nested = reader.decode_into(&nested_field)?;
                self.unique(253, Everything::Nested, Unique::Nested(nested));
            }
            316 => self.nested_list.push(reader.decode_into(&nested_field)?),
            317 => self.fruits_list.push(reader.decode_into(&fruits_field)?),
            _ => {}
        }
        Ok(())
    }
}

impl Encode for Omnibus {
    fn encode(&self, out: &mut Encoder) -> Result<()> {
        out.string(&MEMO, &self.memo)?;
        out.bytes(&RANDOM_BYTES, &self.random_bytes)?;
        out.message(&NESTED, self.nested.as_ref())?;

        out.int32(&INT32_NUMBER, self.int32_number)?;
        out.int64(&INT64_NUMBER, self.int64_number)?;
        out.uint32(&UINT32_NUMBER, self.uint32_number)?;
        out.uint64(&UINT64_NUMBER, self.uint64_number)?;
        out.bool(&FLAG, self.flag)?;
        out.enumeration(&SUIT, self.suit.ordinal())?;
        out.int32(&SFIXED32_NUMBER, self.sfixed32_number)?;
        out.uint32(&FIXED32_NUMBER, self.fixed32_number)?;
        out.float(&FLOAT_NUMBER, self.float_number)?;
        out.int64(&SFIXED64_NUMBER, self.sfixed64_number)?;
        out.uint64(&FIXED64_NUMBER, self.fixed64_number)?;
        out.double(&DOUBLE_NUMBER, self.double_number)?;
        out.int32(&SINT32_NUMBER, self.sint32_number)?;
        out.int64(&SINT64_NUMBER, self.sint64_number)?;

        if let Some(fruit) = &self.fruit {
            let def = match fruit.kind() {
                Fruit::Apple => &FRUIT_APPLE,
                Fruit::Banana => &FRUIT_BANANA,
            };
            out.message(def, Some(fruit.value()))?;
        }

        if let Some(everything) = &self.everything {
            encode_unique(out, everything)?;
        }

        out.int32_list(&INT32_LIST, &self.int32_list)?;
        out.int64_list(&INT64_LIST, &self.int64_list)?;
        out.uint32_list(&UINT32_LIST, &self.uint32_list)?;
        out.uint64_list(&UINT64_LIST, &self.uint64_list)?;
        out.bool_list(&FLAG_LIST, &self.flag_list)?;
        let suits: Vec<i32> = self.suit_list.iter().map(|s| s.ordinal()).collect();
        out.enumeration_list(&SUIT_LIST, &suits)?;
        out.int32_list(&SINT32_LIST, &self.sint32_list)?;
        out.int64_list(&SINT64_LIST, &self.sint64_list)?;
        out.int32_list(&SFIXED32_LIST, &self.sfixed32_list)?;
        out.int64_list(&SFIXED64_LIST, &self.sfixed64_list)?;
        out.uint32_list(&FIXED32_LIST, &self.fixed32_list)?;
        out.uint64_list(&FIXED64_LIST, &self.fixed64_list)?;
        out.float_list(&FLOAT_LIST, &self.float_list)?;
        out.double_list(&DOUBLE_LIST, &self.double_list)?;
        out.string_list(&MEMO_LIST, &self.memo_list)?;
        out.bytes_list(&RANDOM_BYTES_LIST, &self.random_bytes_list)?;
        out.message_list(&NESTED_LIST, &self.nested_list)?;
        out.message_list(&FRUITS_LIST, &self.fruits_list)
    }
}

fn encode_unique(out: &mut Encoder, everything: &EverythingOneOf) -> Result<()> {
    let def = match everything.kind() {
        Everything::Int32 => &INT32_UNIQUE,
        Everything::Int64 => &INT64_UNIQUE,
        Everything::UInt32 => &UINT32_UNIQUE,
        Everything::UInt64 => &UINT64_UNIQUE,
        Everything::Flag => &FLAG_UNIQUE,
        Everything::Suit => &SUIT_UNIQUE,
        Everything::SFixed32 => &SFIXED32_UNIQUE,
        Everything::Fixed32 => &FIXED32_UNIQUE,
        Everything::Float => &FLOAT_UNIQUE,
        Everything::SFixed64 => &SFIXED64_UNIQUE,
        Everything::Fixed64 => &FIXED64_UNIQUE,
        Everything::Double => &DOUBLE_UNIQUE,
        Everything::SInt32 => &SINT32_UNIQUE,
        Everything::SInt64 => &SINT64_UNIQUE,
        Everything::Memo => &MEMO_UNIQUE,
        Everything::RandomBytes => &RANDOM_BYTES_UNIQUE,
        Everything::Nested => &NESTED_UNIQUE,
    };

    match everything.value() {
        Unique::Int32(v) => out.int32(def, *v),
        Unique::Int64(v) => out.int64(def, *v),
        Unique::UInt32(v) => out.uint32(def, *v),
        Unique::UInt64(v) => out.uint64(def, *v),
        Unique::Flag(v) => out.bool(def, *v),
        Unique::Suit(v) => out.enumeration(def, v.ordinal()),
        Unique::Float(v) => out.float(def, *v),
        Unique::Double(v) => out.double(def, *v),
        Unique::Memo(v) => out.string(def, v),
        Unique::RandomBytes(v) => out.bytes(def, v),
        Unique::Nested(v) => out.message(def, Some(v)),
    }
}

/// Decode Omnibus dari bytes dengan default config
pub fn parse_omnibus(bytes: &[u8]) -> Result<Omnibus> {
    let mut omnibus = Omnibus::default();
    protoparse::decode_slice(bytes, &omnibus_field, &mut omnibus)?;
    Ok(omnibus)
}
