pub mod attrs;
pub mod compare;
pub mod copy;
pub mod flatten;
pub mod text;

pub use attrs::{
    attr_names, attr_string, create_private_attributes, find_attr, has_attrs_only,
    remove_attrs_by_type, remove_deep_attrs, value_by_index,
};
pub use compare::{are_equal, deep_equal, deep_equal_opt};
pub use copy::{copy_object, copy_objects, copy_value};
pub use flatten::flat_object;
pub use text::parse_string;
