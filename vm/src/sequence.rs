//! Entrada do simulador: conversão do texto digitado pelo usuário e geração
//! de sequências de exemplo.

use rand::Rng;

use crate::error::{Error, Result};

/// Limites de tamanho das sequências aleatórias de exemplo.
pub const DEFAULT_MIN_LEN: usize = 5;
pub const DEFAULT_MAX_LEN: usize = 14;

/// Lê uma sequência separada por vírgulas, como `"1, 2, 3, 2, 1"`.
///
/// Espaços em volta de cada número são ignorados. Texto vazio é um único
/// token vazio e, portanto, inválido.
pub fn parse_sequence(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            token
                .trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidSequenceToken {
                    position,
                    token: token.trim().to_string(),
                })
        })
        .collect()
}

pub fn parse_frame_count(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(Error::InvalidFrameCount(input.trim().to_string())),
    }
}

pub fn format_sequence(sequence: &[usize]) -> String {
    sequence
        .iter()
        .map(|page| page.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Gera uma sequência de tamanho em `min_len..=max_len` com páginas
/// uniformes em `0..page_domain_size`.
pub fn generate_random_sequence<R: Rng>(
    rng: &mut R,
    min_len: usize,
    max_len: usize,
    page_domain_size: usize,
) -> Result<Vec<usize>> {
    if min_len > max_len {
        return Err(Error::InvalidLengthBounds {
            min: min_len,
            max: max_len,
        });
    }

    if page_domain_size == 0 {
        return Err(Error::InvalidAddressSpace);
    }

    let length = rng.gen_range(min_len..=max_len);

    Ok((0..length)
        .map(|_| rng.gen_range(0..page_domain_size))
        .collect())
}
