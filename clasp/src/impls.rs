/*!
Implementations of the [`parameter`][crate::parameter] traits for various
primitive and standard library types
 */

use crate::Arity;
use crate::parameter::{Parameter, ParameterError, ParsedValue, Value, single};

macro_rules! from_str {
    ($(
        $type:ident $($(::$path:ident)*,)?
    )*) => {
        $(
            impl ParsedValue for $type $($(:: $path)*)? {}

            impl Parameter for $type $($(:: $path)*)? {
                const ARITY: Arity = Arity::Single;

                #[inline]
                fn absent() -> Result<Self, ParameterError> {
                    Err(ParameterError::Required)
                }

                #[inline]
                fn present(params: &[String]) -> Result<Self, ParameterError> {
                    single(params)
                }
            }
        )*
    };
}

from_str! {
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
    f32 f64
    char

    std::string::String,
    std::path::PathBuf,

    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::IpAddr,
    std::net::SocketAddrV4,
    std::net::SocketAddrV6,
    std::net::SocketAddr,
}

impl Parameter for bool {
    const ARITY: Arity = Arity::Flag;

    #[inline]
    fn absent() -> Result<Self, ParameterError> {
        Ok(false)
    }

    #[inline]
    fn present(_params: &[String]) -> Result<Self, ParameterError> {
        Ok(true)
    }
}

impl<T: Value> Parameter for Option<T> {
    const ARITY: Arity = Arity::Single;

    #[inline]
    fn absent() -> Result<Self, ParameterError> {
        Ok(None)
    }

    #[inline]
    fn present(params: &[String]) -> Result<Self, ParameterError> {
        single(params).map(Some)
    }
}

impl<T: Value> Parameter for Vec<T> {
    const ARITY: Arity = Arity::Multiple;

    #[inline]
    fn absent() -> Result<Self, ParameterError> {
        Ok(Vec::new())
    }

    #[inline]
    fn present(params: &[String]) -> Result<Self, ParameterError> {
        params.iter().map(|param| T::from_param(param)).collect()
    }
}
