//! 도메인 계층
//!
//! 엔티티(저장소 표현)와 DTO(와이어 표현)를 분리하여 관리합니다.
//! BSON `_id`(ObjectId)는 와이어에서 24자리 16진수 문자열 `id`로만
//! 노출됩니다.

pub mod dto;
pub mod entities;
